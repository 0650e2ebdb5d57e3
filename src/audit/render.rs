//! Report rendering: text, TSV and (with `interchange`) JSON.
//!
//! All renderers walk the report in its own order: files by path, usages
//! lexicographically. Identical reports always render identically.

use std::fmt::Write;
use std::path::Path;

use super::options::RenderOptions;
use super::report::DependencyReport;

/// Line printed when the target uses nothing from other files.
pub const NO_DEPENDENCIES: &str = "- No external source dependencies found.";

/// Render a report as text with default options.
pub fn render(report: &DependencyReport) -> String {
    render_text(report, &RenderOptions::default())
}

/// Render a report as text.
///
/// ```text
/// Dependencies of src/App.cs:
///
/// File: src/Lib/Helper.cs (in Lib)
///   -> [Method] Compute(int)
///   -> [Type] Helper
/// ```
pub fn render_text(report: &DependencyReport, options: &RenderOptions) -> String {
    let mut out = String::new();
    let indent = options.indentation();

    let _ = writeln!(
        out,
        "Dependencies of {}:",
        options.display_path(report.target()).display()
    );

    if report.is_empty() {
        let _ = writeln!(out, "{indent}{NO_DEPENDENCIES}");
        return out;
    }

    for (file, usages) in report.iter() {
        let _ = write!(out, "\nFile: {}", options.display_path(file).display());
        if options.group_labels {
            if let Some(label) = group_label(file) {
                let _ = write!(out, " (in {label})");
            }
        }
        out.push('\n');

        for usage in usages {
            let _ = writeln!(out, "{indent}-> {usage}");
        }
    }
    out
}

/// Render a report as tab-separated `file<TAB>usage` rows with a header.
pub fn render_tsv(report: &DependencyReport, options: &RenderOptions) -> String {
    let mut out = String::from("file\tusage\n");
    for (file, usage) in report.pairs() {
        let _ = writeln!(out, "{}\t{}", options.display_path(file).display(), usage);
    }
    out
}

/// Name of the directory a file sits in, e.g. `Models` for `src/Models/Car.cs`.
fn group_label(path: &Path) -> Option<String> {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(feature = "interchange")]
mod json {
    use serde::Serialize;

    use super::*;
    use crate::audit::UsageDescriptor;

    #[derive(Serialize)]
    struct JsonReport<'a> {
        target: String,
        dependencies: Vec<JsonDependency<'a>>,
    }

    #[derive(Serialize)]
    struct JsonDependency<'a> {
        file: String,
        usages: Vec<&'a UsageDescriptor>,
    }

    /// Render a report as pretty-printed JSON.
    ///
    /// ```json
    /// { "target": "src/App.cs",
    ///   "dependencies": [ { "file": "src/Helper.cs", "usages": ["[Type] Helper"] } ] }
    /// ```
    pub fn render_json(
        report: &DependencyReport,
        options: &RenderOptions,
    ) -> Result<String, serde_json::Error> {
        let doc = JsonReport {
            target: path_string(options.display_path(report.target())),
            dependencies: report
                .iter()
                .map(|(file, usages)| JsonDependency {
                    file: path_string(options.display_path(file)),
                    usages: usages.iter().collect(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&doc)
    }

    fn path_string(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }
}

#[cfg(feature = "interchange")]
pub use json::render_json;

//! Rendering options

use std::path::{Path, PathBuf};

/// Options controlling how a dependency report is printed
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Show the parent directory name next to each file, to tell apart
    /// files that share a name in different parts of the program
    pub group_labels: bool,
    /// Print paths relative to this root when they live under it
    pub relative_to: Option<PathBuf>,
    /// Number of spaces before each usage line
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            group_labels: true,
            relative_to: None,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// The path as it should be displayed
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        self.relative_to
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
    }

    /// Indentation string for usage lines
    pub fn indentation(&self) -> String {
        " ".repeat(self.indent)
    }
}

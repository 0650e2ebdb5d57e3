//! Report assertion helpers.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crossref::audit::DependencyReport;

/// A report as plain strings, for comparing against literal expectations.
pub fn report_map(report: &DependencyReport) -> BTreeMap<String, BTreeSet<String>> {
    report
        .iter()
        .map(|(file, usages)| {
            (
                file.display().to_string(),
                usages.iter().map(|u| u.to_string()).collect(),
            )
        })
        .collect()
}

/// Build an expected report map from literals.
pub fn expected(entries: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
    entries
        .iter()
        .map(|(file, usages)| {
            (
                file.to_string(),
                usages.iter().map(|u| u.to_string()).collect(),
            )
        })
        .collect()
}

/// Assert the report's target never shows up as a dependency of itself.
pub fn assert_no_self_reference(report: &DependencyReport) {
    assert!(
        !report.contains_file(report.target()),
        "Report for '{}' lists the target itself: {:?}",
        report.target().display(),
        report_map(report)
    );
}

/// Assert `file` is listed with exactly `usages`.
pub fn assert_usages(report: &DependencyReport, file: &str, usages: &[&str]) {
    let actual: Vec<&str> = report
        .usages(Path::new(file))
        .unwrap_or_else(|| {
            panic!(
                "Expected '{}' in report, got {:?}",
                file,
                report_map(report)
            )
        })
        .iter()
        .map(|u| u.as_str())
        .collect();
    assert_eq!(actual, usages, "Usages of '{}' differ", file);
}

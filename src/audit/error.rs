//! Error types for dependency extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while auditing a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The target is not a file the provider has source for.
    #[error("File not found in program: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A target query matched more than one tracked file.
    #[error("'{query}' matches {} files: {}", .candidates.len(), display_paths(.candidates))]
    Ambiguous {
        query: String,
        candidates: Vec<PathBuf>,
    },
}

impl ExtractError {
    /// Create a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Foundation types for the crossref toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Interned file identifiers
//! - [`FileSet`] - Path interner mapping paths to [`FileId`]s
//! - [`Position`], [`Span`] - Line/column positions for name uses
//!
//! This module has NO dependencies on other crossref modules.

mod file_id;
mod position;

pub use file_id::{FileId, FileSet};
pub use position::{Position, Span};

//! # crossref-base
//!
//! Cross-file dependency audit over a resolved program: for one source file,
//! every external symbol it references, grouped by the file that defines it.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! audit     → Extraction, usage descriptors, report rendering
//!   ↓
//! hir       → Resolved program model: symbols, name uses, SymbolProvider
//!   ↓
//! base      → Primitives (FileId, FileSet, Span/Position)
//! ```

// ============================================================================
// MODULES (dependency order: base → hir → audit)
// ============================================================================

/// Foundation types: FileId, FileSet, Span/Position
pub mod base;

/// High-level IR: symbols, name uses, the provider trait and in-memory index
pub mod hir;

/// Dependency audit: extraction, descriptors, rendering
pub mod audit;

// Re-export foundation types
pub use base::{FileId, FileSet, Position, Span};

// Re-export the audit entry points
pub use audit::{
    DependencyReport, ExtractError, RenderOptions, extract_all, extract_dependencies,
    locate_target, render,
};
pub use hir::{ProgramIndex, SymbolProvider};

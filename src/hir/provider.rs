//! The resolver interface the dependency audit runs against.

use std::path::Path;

use super::symbols::{NameUse, Symbol};

/// A whole-program model with every name use already resolvable.
///
/// Implementations own parsing and type resolution; consumers only read.
/// All methods are expected to be cheap, synchronous and side-effect free.
///
/// [`ProgramIndex`](super::ProgramIndex) is the in-memory implementation
/// shipped with this crate. Other analyzers plug in by implementing this trait.
pub trait SymbolProvider {
    /// All files the provider has source for.
    fn tracked_files(&self) -> Vec<&Path>;

    /// Whether `path` is one of the tracked files.
    fn is_tracked(&self, path: &Path) -> bool;

    /// Every identifier occurrence in `path`. Empty for untracked paths.
    fn name_uses(&self, path: &Path) -> impl Iterator<Item = &NameUse>;

    /// The symbol a name use refers to, or `None` for keywords, ambiguous
    /// names and anything the provider could not bind.
    fn resolve(&self, name_use: &NameUse) -> Option<&Symbol>;

    /// The file where `symbol` is declared, or `None` when it only exists in a
    /// compiled dependency.
    fn declaring_file(&self, symbol: &Symbol) -> Option<&Path>;

    /// The nearest type enclosing `symbol`.
    ///
    /// `None` when `symbol` is itself a type or is not declared inside one
    /// (a namespace, for instance).
    fn enclosing_type(&self, symbol: &Symbol) -> Option<&Symbol>;
}

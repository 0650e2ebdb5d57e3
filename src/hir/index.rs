//! In-memory resolved program.
//!
//! [`ProgramIndex`] is a hand-built symbol table: files, the symbols declared
//! in them, and every name use already bound to its target. Analyzers that
//! resolve source on their own can populate one and hand it to the audit.
//!
//! ## Key Data Structures
//!
//! - `symbols` - single source of truth, referenced by [`SymbolId`] everywhere
//! - `uses_by_file` - name uses in recording order, per file
//! - `bindings` - name use → symbol it resolves to

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{trace, warn};

use super::provider::SymbolProvider;
use super::symbols::{NameUse, NameUseId, Signature, Symbol, SymbolId, SymbolKind};
use crate::base::{FileId, FileSet, Span};

/// A fully resolved program held in memory.
#[derive(Clone, Debug, Default)]
pub struct ProgramIndex {
    files: FileSet,
    symbols: Vec<Symbol>,
    /// Simple name -> symbols with that name (overloads share an entry).
    by_name: FxHashMap<SmolStr, Vec<SymbolId>>,
    uses_by_file: FxHashMap<FileId, Vec<NameUse>>,
    bindings: FxHashMap<NameUseId, SymbolId>,
    use_count: usize,
}

impl ProgramIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------------

    /// Track a file. Adding the same path twice returns the same id.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        self.files.insert(path)
    }

    pub fn file_id(&self, path: &Path) -> Option<FileId> {
        self.files.get(path)
    }

    pub fn file_path(&self, file: FileId) -> Option<&Path> {
        self.files.path(file)
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    // ------------------------------------------------------------------------
    // Symbols
    // ------------------------------------------------------------------------

    /// Add a symbol.
    ///
    /// `container` must be a symbol already in the index; anything else is
    /// dropped with a warning so container chains stay acyclic.
    pub fn add_symbol(
        &mut self,
        name: impl Into<SmolStr>,
        kind: SymbolKind,
        container: Option<SymbolId>,
        declarations: Vec<FileId>,
    ) -> SymbolId {
        let id = SymbolId::new(self.symbols.len());
        let name = name.into();

        let container = container.filter(|c| {
            let known = c.index() < self.symbols.len();
            if !known {
                warn!(
                    "[PROGRAM_INDEX] dropping unknown container {:?} of '{}'",
                    c, name
                );
            }
            known
        });

        trace!(
            "[PROGRAM_INDEX] add_symbol: {:?} '{}' {} container={:?} decls={:?}",
            id,
            name,
            kind.label(),
            container,
            declarations
        );

        self.by_name.entry(name.clone()).or_default().push(id);
        self.symbols.push(Symbol {
            id,
            name,
            kind,
            container,
            declarations,
        });
        id
    }

    /// Add a top-level type declared in `file`, or compiled-only when `file` is `None`.
    pub fn add_type(&mut self, name: impl Into<SmolStr>, file: Option<FileId>) -> SymbolId {
        self.add_symbol(name, SymbolKind::Type, None, file.into_iter().collect())
    }

    /// Add a symbol declared inside `owner`, in the owner's primary file.
    pub fn add_member(
        &mut self,
        owner: SymbolId,
        name: impl Into<SmolStr>,
        kind: SymbolKind,
    ) -> SymbolId {
        let declarations = self
            .symbol(owner)
            .and_then(Symbol::primary_declaration)
            .into_iter()
            .collect();
        self.add_symbol(name, kind, Some(owner), declarations)
    }

    pub fn add_method(
        &mut self,
        owner: SymbolId,
        name: impl Into<SmolStr>,
        signature: Signature,
    ) -> SymbolId {
        self.add_member(owner, name, SymbolKind::Method(signature))
    }

    pub fn add_property(&mut self, owner: SymbolId, name: impl Into<SmolStr>) -> SymbolId {
        self.add_member(owner, name, SymbolKind::Property)
    }

    /// Record another declaration site of a symbol (a further part of a partial type).
    ///
    /// Returns false if the symbol is unknown.
    pub fn add_declaration(&mut self, symbol: SymbolId, file: FileId) -> bool {
        match self.symbols.get_mut(symbol.index()) {
            Some(sym) => {
                if !sym.declarations.contains(&file) {
                    sym.declarations.push(file);
                }
                true
            }
            None => false,
        }
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// All symbols with the given simple name.
    pub fn symbols_named(&self, name: &str) -> Vec<&Symbol> {
        self.by_name
            .get(name)
            .map(|ids| ids.iter().filter_map(|id| self.symbol(*id)).collect())
            .unwrap_or_default()
    }

    /// Dotted name through the container chain, e.g. `App.Models.Car.Drive`.
    pub fn qualified_name(&self, id: SymbolId) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = self.symbol(id);
        while let Some(sym) = current {
            parts.push(sym.name.as_str());
            current = sym.container.and_then(|c| self.symbol(c));
        }
        if parts.is_empty() {
            return None;
        }
        parts.reverse();
        Some(parts.join("."))
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    // ------------------------------------------------------------------------
    // Name uses
    // ------------------------------------------------------------------------

    /// Record an identifier occurrence in `file`, bound to `target`.
    ///
    /// A `None` target models a name the resolver could not bind.
    pub fn record_use(
        &mut self,
        file: FileId,
        text: impl Into<SmolStr>,
        span: Span,
        target: Option<SymbolId>,
    ) -> NameUseId {
        let id = NameUseId::new(self.use_count);
        self.use_count += 1;

        let name_use = NameUse {
            id,
            file,
            text: text.into(),
            span,
        };
        trace!(
            "[PROGRAM_INDEX] record_use: {} '{}' at {} -> {:?}",
            file, name_use.text, span, target
        );

        self.uses_by_file.entry(file).or_default().push(name_use);
        if let Some(target) = target {
            self.bindings.insert(id, target);
        }
        id
    }

    /// Name uses recorded for `file`, in recording order.
    pub fn name_uses_in(&self, file: FileId) -> &[NameUse] {
        self.uses_by_file
            .get(&file)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The symbol a name use was bound to.
    pub fn binding(&self, name_use: NameUseId) -> Option<SymbolId> {
        self.bindings.get(&name_use).copied()
    }

    pub fn use_count(&self) -> usize {
        self.use_count
    }
}

impl SymbolProvider for ProgramIndex {
    fn tracked_files(&self) -> Vec<&Path> {
        self.files.iter().map(|(_, path)| path).collect()
    }

    fn is_tracked(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn name_uses(&self, path: &Path) -> impl Iterator<Item = &NameUse> {
        self.files
            .get(path)
            .into_iter()
            .flat_map(|file| self.name_uses_in(file))
    }

    fn resolve(&self, name_use: &NameUse) -> Option<&Symbol> {
        self.binding(name_use.id).and_then(|id| self.symbol(id))
    }

    fn declaring_file(&self, symbol: &Symbol) -> Option<&Path> {
        symbol
            .primary_declaration()
            .and_then(|file| self.files.path(file))
    }

    fn enclosing_type(&self, symbol: &Symbol) -> Option<&Symbol> {
        if symbol.kind.is_type() {
            return None;
        }
        let mut current = symbol.container.and_then(|c| self.symbol(c));
        while let Some(sym) = current {
            if sym.kind.is_type() {
                return Some(sym);
            }
            current = sym.container.and_then(|c| self.symbol(c));
        }
        None
    }
}

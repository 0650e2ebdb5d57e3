//! Extraction works against any SymbolProvider, not only ProgramIndex.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossref::audit::{extract_dependencies, render};
use crossref::base::{FileId, Span};
use crossref::hir::{NameUse, NameUseId, Signature, Symbol, SymbolId, SymbolKind, SymbolProvider};

/// A provider where every file holds one type and uses are listed by hand.
struct FlatProvider {
    files: Vec<PathBuf>,
    symbols: Vec<Symbol>,
    uses: HashMap<PathBuf, Vec<(NameUse, Option<SymbolId>)>>,
}

impl FlatProvider {
    fn new(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(|f| PathBuf::from(*f)).collect(),
            symbols: Vec::new(),
            uses: HashMap::new(),
        }
    }

    fn symbol(
        &mut self,
        name: &str,
        kind: SymbolKind,
        container: Option<SymbolId>,
        file: Option<usize>,
    ) -> SymbolId {
        let id = SymbolId::new(self.symbols.len());
        self.symbols.push(Symbol {
            id,
            name: name.into(),
            kind,
            container,
            declarations: file.map(|i| FileId::new(i as u32)).into_iter().collect(),
        });
        id
    }

    fn use_in(&mut self, file: usize, text: &str, target: Option<SymbolId>) {
        let path = self.files[file].clone();
        let uses = self.uses.entry(path).or_default();
        let name_use = NameUse {
            id: NameUseId::new(uses.len()),
            file: FileId::new(file as u32),
            text: text.into(),
            span: Span::identifier(uses.len() as u32, 0, text.len() as u32),
        };
        uses.push((name_use, target));
    }
}

impl SymbolProvider for FlatProvider {
    fn tracked_files(&self) -> Vec<&Path> {
        self.files.iter().map(PathBuf::as_path).collect()
    }

    fn is_tracked(&self, path: &Path) -> bool {
        self.files.iter().any(|p| p == path)
    }

    fn name_uses(&self, path: &Path) -> impl Iterator<Item = &NameUse> {
        self.uses
            .get(path)
            .into_iter()
            .flatten()
            .map(|(name_use, _)| name_use)
    }

    fn resolve(&self, name_use: &NameUse) -> Option<&Symbol> {
        let path = self.files.get(name_use.file.index())?;
        let (_, target) = self.uses.get(path)?.get(name_use.id.index())?;
        target.as_ref().and_then(|id| self.symbols.get(id.index()))
    }

    fn declaring_file(&self, symbol: &Symbol) -> Option<&Path> {
        symbol
            .declarations
            .first()
            .and_then(|file| self.files.get(file.index()))
            .map(PathBuf::as_path)
    }

    fn enclosing_type(&self, symbol: &Symbol) -> Option<&Symbol> {
        let container = self.symbols.get(symbol.container?.index())?;
        if container.kind.is_type() {
            Some(container)
        } else {
            self.enclosing_type(container)
        }
    }
}

#[test]
fn test_extract_over_custom_provider() {
    let mut provider = FlatProvider::new(&["Main.cs", "Shapes/Square.cs"]);
    let square = provider.symbol("Square", SymbolKind::Type, None, Some(1));
    let area = provider.symbol(
        "Area",
        SymbolKind::Method(Signature::new(["double"])),
        Some(square),
        Some(1),
    );
    let math = provider.symbol("Math", SymbolKind::Type, None, None);
    let sqrt = provider.symbol(
        "Sqrt",
        SymbolKind::Method(Signature::new(["double"])),
        Some(math),
        None,
    );
    provider.use_in(0, "Square", Some(square));
    provider.use_in(0, "Area", Some(area));
    provider.use_in(0, "Sqrt", Some(sqrt));
    provider.use_in(0, "unknown", None);

    let report = extract_dependencies(&provider, Path::new("Main.cs")).unwrap();
    assert_eq!(
        render(&report),
        "Dependencies of Main.cs:\n\nFile: Shapes/Square.cs (in Shapes)\n  -> [Method] Area(double)\n  -> [Type] Square\n"
    );
}

#[test]
fn test_extract_through_boxed_provider() {
    let provider = Box::new(FlatProvider::new(&["Only.cs"]));
    let report = extract_dependencies(provider.as_ref(), Path::new("Only.cs")).unwrap();
    assert!(report.is_empty());
}

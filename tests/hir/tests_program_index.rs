//! ProgramIndex queries through the SymbolProvider trait.

use std::path::Path;

use crossref::hir::{OtherKind, SymbolKind, SymbolProvider};

use crate::helpers::program_fixtures::{ProgramFixture, helper_program};

#[test]
fn test_tracked_files_in_insertion_order() {
    let f = helper_program();
    assert_eq!(
        f.index.tracked_files(),
        vec![
            Path::new("src/App.cs"),
            Path::new("src/Lib/Helper.cs"),
            Path::new("src/Models/Car.cs"),
        ]
    );
    assert!(f.index.is_tracked(Path::new("src/App.cs")));
    assert!(!f.index.is_tracked(Path::new("App.cs")));
}

#[test]
fn test_name_uses_of_untracked_file_are_empty() {
    let f = helper_program();
    assert_eq!(f.index.name_uses(Path::new("nowhere.cs")).count(), 0);
}

#[test]
fn test_name_uses_keep_recording_order() {
    let f = helper_program();
    let texts: Vec<_> = f
        .index
        .name_uses(Path::new("src/Lib/Helper.cs"))
        .map(|u| u.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Car", "Helper"]);
}

#[test]
fn test_unresolved_use_has_no_symbol() {
    let f = helper_program();
    let var = f
        .index
        .name_uses(Path::new("src/App.cs"))
        .find(|u| u.text == "var")
        .unwrap();
    assert!(f.index.resolve(var).is_none());
}

#[test]
fn test_enclosing_type_skips_non_type_containers() {
    let mut f = ProgramFixture::new();
    let file = f.file("Shapes.cs");
    let ns = f
        .index
        .add_symbol("Shapes", SymbolKind::Other(OtherKind::Namespace), None, vec![file]);
    let circle = f
        .index
        .add_symbol("Circle", SymbolKind::Type, Some(ns), vec![file]);
    let area = f.method(circle, "Area", &[]);
    let local = f
        .index
        .add_member(area, "r", SymbolKind::Other(OtherKind::Local));

    let index = &f.index;
    let enclosing = |id| index.enclosing_type(index.symbol(id).unwrap()).map(|s| s.id);
    assert_eq!(enclosing(local), Some(circle));
    assert_eq!(enclosing(area), Some(circle));
    assert_eq!(enclosing(circle), None);
    assert_eq!(enclosing(ns), None);
    assert_eq!(index.qualified_name(local).as_deref(), Some("Shapes.Circle.Area.r"));
}

#[test]
fn test_nested_type_is_its_own_defining_type() {
    let mut f = ProgramFixture::new();
    let app = f.file("App.cs");
    let outer_file = f.file("Outer.cs");
    let outer = f.ty("Outer", outer_file);
    let inner = f
        .index
        .add_member(outer, "Inner", SymbolKind::Type);
    f.uses(app, inner);

    let report = f.extract("App.cs");
    let usages: Vec<_> = report
        .usages(Path::new("Outer.cs"))
        .unwrap()
        .iter()
        .map(|u| u.as_str())
        .collect();
    assert_eq!(usages, vec!["[Type] Inner"]);
}

#[test]
fn test_partial_type_declaring_file_is_first_declaration() {
    let mut f = ProgramFixture::new();
    let first = f.file("Widget.cs");
    let second = f.file("Widget.Designer.cs");
    let widget = f.ty("Widget", first);
    assert!(f.index.add_declaration(widget, second));
    assert!(f.index.add_declaration(widget, second));

    let sym = f.index.symbol(widget).unwrap();
    assert_eq!(sym.declarations.len(), 2);
    assert_eq!(f.index.declaring_file(sym), Some(Path::new("Widget.cs")));
}

//! Usage descriptors: the canonical text a referenced symbol is reported as.

use std::borrow::Borrow;
use std::fmt;

use crate::hir::{Symbol, SymbolKind};

/// Canonical, category-tagged name of a referenced symbol, e.g. `[Method] Compute(int)`.
///
/// Equal symbols (same kind, name and signature) always produce equal
/// descriptors, which is what lets a report collapse repeated references.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize), serde(transparent))]
pub struct UsageDescriptor(String);

impl UsageDescriptor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UsageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UsageDescriptor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UsageDescriptor {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Describe a symbol as it should appear in a dependency report.
///
/// - methods: `[Method] Name(T1, T2)`, with `<T>` type parameters when generic
/// - properties and types: `[Property] Name`, `[Type] Name`
/// - anything else: `[<Kind>] Name`
pub fn describe(symbol: &Symbol) -> UsageDescriptor {
    let text = match &symbol.kind {
        SymbolKind::Method(signature) => format!("[Method] {}{}", symbol.name, signature),
        kind => format!("[{}] {}", kind.label(), symbol.name),
    };
    UsageDescriptor(text)
}

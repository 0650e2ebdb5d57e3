//! Symbol and name-use types for a resolved program.
//!
//! Contains [`Symbol`], its category [`SymbolKind`], method [`Signature`]s and
//! the [`NameUse`] occurrences that a provider resolves to symbols.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{FileId, Span};

// ============================================================================
// IDS
// ============================================================================

/// Identifier of a symbol in the provider that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Ids are 32-bit: `index` must not exceed `u32::MAX`.
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "SymbolId index overflow: {index}");
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a single name use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameUseId(u32);

impl NameUseId {
    /// Ids are 32-bit: `index` must not exceed `u32::MAX`.
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "NameUseId index overflow: {index}");
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ============================================================================
// SYMBOL KINDS
// ============================================================================

/// The category of a symbol.
///
/// Methods carry their signature so that overloads stay distinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A named type: class, struct, interface, enum, delegate, record.
    Type,
    /// A method, constructor or operator.
    Method(Signature),
    /// A property or indexer.
    Property,
    /// Any other named entity.
    Other(OtherKind),
}

impl SymbolKind {
    pub fn is_type(&self) -> bool {
        matches!(self, SymbolKind::Type)
    }

    /// The category tag shown in usage descriptors.
    pub fn label(&self) -> &'static str {
        match self {
            SymbolKind::Type => "Type",
            SymbolKind::Method(_) => "Method",
            SymbolKind::Property => "Property",
            SymbolKind::Other(other) => other.label(),
        }
    }
}

/// Symbol categories that are neither types, methods nor properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OtherKind {
    Namespace,
    Field,
    Event,
    Parameter,
    Local,
    TypeParameter,
    Alias,
    Label,
}

impl OtherKind {
    pub const ALL: [OtherKind; 8] = [
        OtherKind::Namespace,
        OtherKind::Field,
        OtherKind::Event,
        OtherKind::Parameter,
        OtherKind::Local,
        OtherKind::TypeParameter,
        OtherKind::Alias,
        OtherKind::Label,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OtherKind::Namespace => "Namespace",
            OtherKind::Field => "Field",
            OtherKind::Event => "Event",
            OtherKind::Parameter => "Parameter",
            OtherKind::Local => "Local",
            OtherKind::TypeParameter => "TypeParameter",
            OtherKind::Alias => "Alias",
            OtherKind::Label => "Label",
        }
    }

    /// Parse a label case-insensitively (`"field"`, `"Field"`, `"typeparameter"`).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for OtherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A method signature in minimally-qualified form.
///
/// Parameter types are stored as written by the resolver (`int`, `List<string>`,
/// `ref Span<byte>`), without parameter names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    pub type_parameters: Vec<SmolStr>,
    pub parameters: Vec<SmolStr>,
}

impl Signature {
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            type_parameters: Vec::new(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_type_parameters<I, S>(mut self, type_parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.type_parameters = type_parameters.into_iter().map(Into::into).collect();
        self
    }
}

/// Displays `<T, U>(int, string)`; the angle brackets are omitted for
/// non-generic methods, the parentheses never are.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.type_parameters.is_empty() {
            write!(f, "<{}>", self.type_parameters.join(", "))?;
        }
        write!(f, "({})", self.parameters.join(", "))
    }
}

// ============================================================================
// SYMBOLS
// ============================================================================

/// A named entity defined somewhere in the program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// The symbol this one is declared inside (a method's type, a type's namespace).
    pub container: Option<SymbolId>,
    /// Files declaring this symbol. Empty for symbols that only exist in
    /// compiled dependencies; more than one for partial types.
    pub declarations: Vec<FileId>,
}

impl Symbol {
    /// The file that counts as this symbol's home: its first declaration.
    pub fn primary_declaration(&self) -> Option<FileId> {
        self.declarations.first().copied()
    }

    /// Whether the symbol has no source declaration at all.
    pub fn is_compiled_only(&self) -> bool {
        self.declarations.is_empty()
    }
}

// ============================================================================
// NAME USES
// ============================================================================

/// An identifier occurrence in a file that may refer to a [`Symbol`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NameUse {
    pub id: NameUseId,
    pub file: FileId,
    /// The identifier as written.
    pub text: SmolStr,
    pub span: Span,
}

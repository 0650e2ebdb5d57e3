//! JSON snapshots of a resolved program.
//!
//! A snapshot is what an external analyzer writes after resolving a program:
//! the tracked files, the symbols with their declaration sites, and each name
//! use with the key of the symbol it binds to.
//!
//! ```json
//! {
//!   "files": ["src/App.cs", "src/Helper.cs"],
//!   "symbols": [
//!     { "key": "Helper", "name": "Helper", "kind": "type", "declared_in": ["src/Helper.cs"] },
//!     { "key": "Helper.Compute(int)", "name": "Compute", "kind": "method",
//!       "container": "Helper", "parameters": ["int"] }
//!   ],
//!   "uses": [
//!     { "file": "src/App.cs", "text": "Compute", "line": 4, "column": 15,
//!       "symbol": "Helper.Compute(int)" }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::index::ProgramIndex;
use super::symbols::{OtherKind, Signature, SymbolId, SymbolKind};
use crate::base::{FileId, Span};

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// IO error while reading the snapshot file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a document that does not match the snapshot shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two symbols share a key.
    #[error("Duplicate symbol key: {0}")]
    DuplicateSymbol(String),

    /// A container or use names a symbol key that is not declared before it.
    #[error("Unknown symbol key: {0}")]
    UnknownSymbol(String),

    /// A declaration or use names a file missing from `files`.
    #[error("Unknown file: {}", .0.display())]
    UnknownFile(PathBuf),

    /// The `kind` field is not a recognised symbol category.
    #[error("Unknown symbol kind '{kind}' for symbol {key}")]
    UnknownKind { key: String, kind: String },
}

/// Serialized form of a resolved program.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
    #[serde(default)]
    pub uses: Vec<UseEntry>,
}

/// One symbol in a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// Unique key other entries refer to this symbol by.
    pub key: String,
    pub name: String,
    /// `type`, `method`, `property`, or an other-kind label such as `field`.
    pub kind: String,
    /// Key of the enclosing symbol; must appear earlier in `symbols`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,
    /// Declaring files. Omitted for members, which then inherit their
    /// container's primary file; empty for compiled-only symbols.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_in: Option<Vec<PathBuf>>,
}

/// One name use in a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UseEntry {
    pub file: PathBuf,
    pub text: String,
    /// 0-indexed line.
    #[serde(default)]
    pub line: u32,
    /// 0-indexed column.
    #[serde(default)]
    pub column: u32,
    /// Key of the bound symbol; absent when the name did not resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl ProgramSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build a [`ProgramIndex`] from this snapshot.
    pub fn into_index(self) -> Result<ProgramIndex, SnapshotError> {
        let mut index = ProgramIndex::new();
        for path in &self.files {
            index.add_file(path.clone());
        }

        let file_of = |index: &ProgramIndex, path: &Path| {
            index
                .file_id(path)
                .ok_or_else(|| SnapshotError::UnknownFile(path.to_path_buf()))
        };

        let mut keys: FxHashMap<String, SymbolId> = FxHashMap::default();
        for entry in self.symbols {
            if keys.contains_key(&entry.key) {
                return Err(SnapshotError::DuplicateSymbol(entry.key));
            }
            let kind = parse_kind(&entry)?;
            let container = match &entry.container {
                Some(key) => Some(
                    *keys
                        .get(key)
                        .ok_or_else(|| SnapshotError::UnknownSymbol(key.clone()))?,
                ),
                None => None,
            };

            let id = match (&entry.declared_in, container) {
                (Some(paths), _) => {
                    let declarations = paths
                        .iter()
                        .map(|p| file_of(&index, p))
                        .collect::<Result<Vec<FileId>, _>>()?;
                    index.add_symbol(entry.name, kind, container, declarations)
                }
                (None, Some(owner)) => index.add_member(owner, entry.name, kind),
                (None, None) => index.add_symbol(entry.name, kind, None, Vec::new()),
            };
            keys.insert(entry.key, id);
        }

        for entry in self.uses {
            let file = file_of(&index, &entry.file)?;
            let target = match &entry.symbol {
                Some(key) => Some(
                    *keys
                        .get(key)
                        .ok_or_else(|| SnapshotError::UnknownSymbol(key.clone()))?,
                ),
                None => None,
            };
            let len = entry.text.chars().count() as u32;
            let span = Span::identifier(entry.line, entry.column, len);
            index.record_use(file, entry.text, span, target);
        }

        debug!(
            "[SNAPSHOT] loaded {} files, {} symbols, {} uses",
            index.files().len(),
            index.symbol_count(),
            index.use_count()
        );
        Ok(index)
    }
}

fn parse_kind(entry: &SymbolEntry) -> Result<SymbolKind, SnapshotError> {
    let kind = match entry.kind.to_ascii_lowercase().as_str() {
        "type" | "class" | "struct" | "interface" | "enum" | "delegate" | "record" => {
            SymbolKind::Type
        }
        "method" | "constructor" => SymbolKind::Method(
            Signature::new(entry.parameters.iter().map(String::as_str))
                .with_type_parameters(entry.type_parameters.iter().map(String::as_str)),
        ),
        "property" | "indexer" => SymbolKind::Property,
        other => OtherKind::from_label(other)
            .map(SymbolKind::Other)
            .ok_or_else(|| SnapshotError::UnknownKind {
                key: entry.key.clone(),
                kind: entry.kind.clone(),
            })?,
    };
    Ok(kind)
}

/// Read a snapshot file and build the index it describes.
pub fn load_snapshot(path: &Path) -> Result<ProgramIndex, SnapshotError> {
    let text = std::fs::read_to_string(path)?;
    ProgramSnapshot::from_json(&text)?.into_index()
}

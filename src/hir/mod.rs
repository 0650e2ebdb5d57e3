//! High-level IR (HIR): the resolved program the audit reads.
//!
//! The dependency audit never parses source. It consumes a program in which
//! every identifier is already bound, through the [`SymbolProvider`] trait.
//!
//! ## Key Types
//!
//! - [`SymbolProvider`]: Resolver interface (name uses, bindings, declaring files)
//! - [`ProgramIndex`]: In-memory provider built by hand or from a snapshot
//! - [`Symbol`] / [`SymbolKind`]: A resolved entity and its category
//! - [`NameUse`]: One identifier occurrence in a file
//!
//! ## Layers
//!
//! ```text
//! ProgramSnapshot (JSON)    ← INPUT: an external analyzer's output
//!     │
//!     ▼
//! ProgramIndex              ← files, symbols, bound name uses
//!     │
//!     ▼
//! SymbolProvider            ← what the audit queries
//! ```

mod index;
mod provider;
#[cfg(feature = "interchange")]
mod snapshot;
mod symbols;

pub use index::ProgramIndex;
pub use provider::SymbolProvider;
#[cfg(feature = "interchange")]
pub use snapshot::{ProgramSnapshot, SnapshotError, SymbolEntry, UseEntry, load_snapshot};
pub use symbols::{NameUse, NameUseId, OtherKind, Signature, Symbol, SymbolId, SymbolKind};

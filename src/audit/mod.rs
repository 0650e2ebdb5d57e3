//! Cross-file dependency audit.
//!
//! Given a [`SymbolProvider`](crate::hir::SymbolProvider) and one of its
//! files, report every symbol the file uses that is defined in another
//! tracked file, grouped by that file.
//!
//! ## Usage
//!
//! ```
//! use std::path::Path;
//! use crossref::audit::{extract_dependencies, render};
//! use crossref::base::Span;
//! use crossref::hir::{ProgramIndex, Signature};
//!
//! let mut program = ProgramIndex::new();
//! let app = program.add_file("src/App.cs");
//! let lib = program.add_file("src/Lib/Helper.cs");
//! let helper = program.add_type("Helper", Some(lib));
//! let compute = program.add_method(helper, "Compute", Signature::new(["int"]));
//! program.record_use(app, "Compute", Span::identifier(3, 15, 7), Some(compute));
//!
//! let report = extract_dependencies(&program, Path::new("src/App.cs")).unwrap();
//! assert_eq!(
//!     render(&report),
//!     "Dependencies of src/App.cs:\n\nFile: src/Lib/Helper.cs (in Lib)\n  -> [Method] Compute(int)\n"
//! );
//! ```

mod descriptor;
mod error;
mod extract;
mod options;
mod render;
mod report;

pub use descriptor::{UsageDescriptor, describe};
pub use error::ExtractError;
pub use extract::{extract_all, extract_dependencies, locate_target};
pub use options::RenderOptions;
#[cfg(feature = "interchange")]
pub use render::render_json;
pub use render::{NO_DEPENDENCIES, render, render_text, render_tsv};
pub use report::DependencyReport;

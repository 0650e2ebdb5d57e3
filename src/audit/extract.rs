//! Dependency extraction: what a file pulls in, and from where.
//!
//! For every name use in the target file:
//!
//! ```text
//! name use ──resolve──▶ symbol ──(type itself | enclosing type)──▶ defining type
//!                                                                     │
//!                                                        declaring file of defining type
//!                                                                     │
//!                              none (compiled only) or target itself ─┴─ other file
//!                                         skip                        report[file] += describe(symbol)
//! ```
//!
//! The report groups by the *defining type's* file but names the *original*
//! symbol, so a call to `Helper.Compute(int)` is listed as
//! `[Method] Compute(int)` under the file declaring `Helper`.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, trace};

use super::descriptor::describe;
use super::error::ExtractError;
use super::report::DependencyReport;
use crate::hir::SymbolProvider;

/// Counters for one extraction run, logged at debug level.
#[derive(Debug, Default)]
struct ExtractStats {
    visited: usize,
    unresolved: usize,
    no_enclosing_type: usize,
    compiled_only: usize,
    self_references: usize,
    recorded: usize,
}

/// Collect every symbol `target` uses from other files.
///
/// Fails with [`ExtractError::NotFound`] if the provider does not track
/// `target`. Unresolved names are skipped, never reported as errors.
pub fn extract_dependencies<P>(provider: &P, target: &Path) -> Result<DependencyReport, ExtractError>
where
    P: SymbolProvider + ?Sized,
{
    if !provider.is_tracked(target) {
        return Err(ExtractError::not_found(target));
    }

    let mut report = DependencyReport::new(target);
    let mut stats = ExtractStats::default();

    for name_use in provider.name_uses(target) {
        stats.visited += 1;

        let Some(symbol) = provider.resolve(name_use) else {
            trace!("[EXTRACT] unresolved '{}' at {}", name_use.text, name_use.span);
            stats.unresolved += 1;
            continue;
        };

        let defining_type = if symbol.kind.is_type() {
            symbol
        } else {
            match provider.enclosing_type(symbol) {
                Some(ty) => ty,
                None => {
                    trace!(
                        "[EXTRACT] '{}' at {} has no enclosing type",
                        symbol.name, name_use.span
                    );
                    stats.no_enclosing_type += 1;
                    continue;
                }
            }
        };

        let Some(file) = provider.declaring_file(defining_type) else {
            trace!(
                "[EXTRACT] '{}' is defined outside tracked source ({})",
                symbol.name, defining_type.name
            );
            stats.compiled_only += 1;
            continue;
        };

        if file == target {
            stats.self_references += 1;
            continue;
        }

        let descriptor = describe(symbol);
        trace!(
            "[EXTRACT] '{}' at {} -> {} in {}",
            name_use.text,
            name_use.span,
            descriptor,
            file.display()
        );
        if report.insert(file, descriptor) {
            stats.recorded += 1;
        }
    }

    debug!(
        "[EXTRACT] {}: {} name uses, {} unresolved, {} without enclosing type, {} compiled-only, {} self references, {} usages in {} files",
        target.display(),
        stats.visited,
        stats.unresolved,
        stats.no_enclosing_type,
        stats.compiled_only,
        stats.self_references,
        stats.recorded,
        report.file_count()
    );

    Ok(report)
}

/// Audit every tracked file.
///
/// Files are processed in parallel; the returned reports are ordered by target path.
pub fn extract_all<P>(provider: &P) -> Result<Vec<DependencyReport>, ExtractError>
where
    P: SymbolProvider + Sync + ?Sized,
{
    let mut targets: Vec<&Path> = provider.tracked_files();
    targets.sort();

    debug!("[EXTRACT] auditing {} files", targets.len());

    targets
        .par_iter()
        .map(|target| extract_dependencies(provider, target))
        .collect()
}

/// Find the tracked file a user-supplied `query` names.
///
/// An exact tracked path wins. Otherwise a query with several components
/// (`Models/Car.cs`) matches paths ending in those components, and a bare
/// name matches files whose name ends with it (`Adapter.cs` finds
/// `src/ModelPageAdapter.cs`). An empty query matches nothing.
pub fn locate_target<P>(provider: &P, query: &str) -> Result<PathBuf, ExtractError>
where
    P: SymbolProvider + ?Sized,
{
    if query.is_empty() {
        return Err(ExtractError::not_found(query));
    }

    let query_path = Path::new(query);
    if provider.is_tracked(query_path) {
        return Ok(query_path.to_path_buf());
    }

    let by_components = query_path.components().count() > 1;
    let mut candidates: Vec<PathBuf> = provider
        .tracked_files()
        .into_iter()
        .filter(|path| {
            if by_components {
                path.ends_with(query_path)
            } else {
                path.file_name()
                    .map(|name| name.to_string_lossy().ends_with(query))
                    .unwrap_or(false)
            }
        })
        .map(Path::to_path_buf)
        .collect();
    candidates.sort();

    trace!("[EXTRACT] locate '{}': {:?}", query, candidates);

    match candidates.len() {
        0 => Err(ExtractError::not_found(query)),
        1 => Ok(candidates.remove(0)),
        _ => Err(ExtractError::Ambiguous {
            query: query.to_string(),
            candidates,
        }),
    }
}

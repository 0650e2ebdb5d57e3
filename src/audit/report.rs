//! The result of auditing one file.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::descriptor::UsageDescriptor;

/// External usages of one target file, grouped by the file that defines them.
///
/// Files are ordered by path and descriptors lexicographically, so iterating
/// a report never depends on the order references were discovered in.
/// The target itself is never a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyReport {
    target: PathBuf,
    files: BTreeMap<PathBuf, BTreeSet<UsageDescriptor>>,
}

impl DependencyReport {
    /// Create an empty report for `target`.
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            files: BTreeMap::new(),
        }
    }

    /// The audited file.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Record that the target uses `descriptor`, defined in `file`.
    ///
    /// Returns true if the usage was not recorded before.
    pub(crate) fn insert(&mut self, file: &Path, descriptor: UsageDescriptor) -> bool {
        debug_assert_ne!(file, self.target.as_path(), "target cannot depend on itself");
        match self.files.get_mut(file) {
            Some(usages) => usages.insert(descriptor),
            None => {
                self.files
                    .insert(file.to_path_buf(), BTreeSet::from([descriptor]));
                true
            }
        }
    }

    /// True if the target uses nothing from other files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files the target depends on.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of distinct usages across all files.
    pub fn usage_count(&self) -> usize {
        self.files.values().map(BTreeSet::len).sum()
    }

    pub fn contains_file(&self, file: &Path) -> bool {
        self.files.contains_key(file)
    }

    /// Usages of symbols defined in `file`.
    pub fn usages(&self, file: &Path) -> Option<&BTreeSet<UsageDescriptor>> {
        self.files.get(file)
    }

    /// Files the target depends on, in path order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Each dependency file with its usages, in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &BTreeSet<UsageDescriptor>)> {
        self.files.iter().map(|(path, usages)| (path.as_path(), usages))
    }

    /// Flat `(file, usage)` rows, ordered by file then usage.
    pub fn pairs(&self) -> impl Iterator<Item = (&Path, &UsageDescriptor)> {
        self.iter()
            .flat_map(|(path, usages)| usages.iter().map(move |usage| (path, usage)))
    }
}

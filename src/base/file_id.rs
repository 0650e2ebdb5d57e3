//! Interned file identifiers.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

/// Identifier of a file tracked by a [`FileSet`].
///
/// Cheap to copy and compare; only meaningful together with the set that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u32);

impl FileId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Index of this file in its [`FileSet`].
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

/// Set of tracked file paths.
///
/// Interning a path returns a stable [`FileId`]. Ids are handed out in insertion
/// order, so the same sequence of `insert` calls always yields the same ids.
/// Ids are 32-bit: a set holds at most `u32::MAX + 1` paths.
#[derive(Clone, Debug, Default)]
pub struct FileSet {
    paths: IndexSet<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a path, returning the existing id if it is already tracked.
    pub fn insert(&mut self, path: impl Into<PathBuf>) -> FileId {
        let (index, _) = self.paths.insert_full(path.into());
        file_id(index)
    }

    /// Look up the id of a tracked path.
    pub fn get(&self, path: &Path) -> Option<FileId> {
        self.paths.get_index_of(path).map(file_id)
    }

    /// Path of a tracked file.
    pub fn path(&self, file: FileId) -> Option<&Path> {
        self.paths.get_index(file.index()).map(PathBuf::as_path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Iterate over all tracked files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &Path)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (file_id(i), p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn file_id(index: usize) -> FileId {
    debug_assert!(index <= u32::MAX as usize, "FileSet index overflow: {index}");
    FileId::new(index as u32)
}

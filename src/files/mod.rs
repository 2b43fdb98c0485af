//! File set value types
//!
//! Every stage of the collector consumes a [`FileSet`] and produces a new one.
//! Paths are relative to the analysis root and always use `/` as separator.

pub mod walker;

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A set of unique root-relative file paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileSet(BTreeSet<String>);

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root-relative path as given
    ///
    /// The walker produces `/`-joined paths; nothing is rewritten here, so a
    /// `\` inside a unix file name stays part of that name.
    pub fn insert(&mut self, path: impl AsRef<str>) -> bool {
        self.0.insert(path.as_ref().to_string())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keep only the paths for which `keep` returns true
    pub fn retain(self, mut keep: impl FnMut(&str) -> bool) -> Self {
        Self(self.0.into_iter().filter(|path| keep(path)).collect())
    }

    pub fn is_subset(&self, other: &FileSet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_disjoint(&self, other: &FileSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn union(&self, other: &FileSet) -> FileSet {
        Self(self.0.union(&other.0).cloned().collect())
    }
}

impl<S: AsRef<str>> FromIterator<S> for FileSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FileSet::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

impl IntoIterator for FileSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of the permission check: a strict partition of its input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckedFiles {
    pub readable_files: FileSet,
    pub unreadable_files: FileSet,
}

/// Files eligible for analysis under a root directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilesTarget {
    pub directory: PathBuf,
    pub readable_files: FileSet,
    pub unreadable_files: FileSet,
}

impl FilesTarget {
    pub fn new(directory: impl AsRef<Path>, checked: CheckedFiles) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            readable_files: checked.readable_files,
            unreadable_files: checked.unreadable_files,
        }
    }

    /// Same target with the readable set replaced
    pub fn with_readable_files(self, readable_files: FileSet) -> Self {
        Self {
            readable_files,
            ..self
        }
    }
}

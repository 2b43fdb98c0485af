use crate::files::FileSet;
use crate::filters::{Filter, exclude_matching};

/// Prefix Filter - exclusion by leading path text
///
/// A plain string prefix test against the normalized relative path. No
/// segment awareness: `vendor` excludes both `vendor/a.js` and `vendored.js`.
pub struct PrefixFilter {
    prefixes: Vec<String>,
}

impl PrefixFilter {
    pub fn new<S: AsRef<str>>(prefixes: &[S]) -> Self {
        Self {
            prefixes: prefixes
                .iter()
                .map(|prefix| prefix.as_ref().to_string())
                .collect(),
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Filter for PrefixFilter {
    fn filter(&self, files: FileSet) -> FileSet {
        if self.prefixes.is_empty() {
            return files;
        }
        exclude_matching(files, self.name(), |path| self.is_match(path))
    }

    fn name(&self) -> &'static str {
        "PrefixFilter"
    }
}

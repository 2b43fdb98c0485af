use crate::error::{FilesError, Result};
use crate::files::FileSet;
use crate::filters::{Filter, exclude_matching};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Glob Filter - exclusion by filesystem glob
///
/// Responsibilities:
/// - Compile all patterns once into a single GlobSet
/// - Exclude every path matching at least one pattern
/// - Short-circuit to identity when there are no patterns
///
/// `*` and `?` stay within one path segment; `**` spans segments.
pub struct GlobFilter {
    globset: Option<GlobSet>,
}

impl GlobFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { globset: None });
        }
        Ok(Self {
            globset: Some(compile_glob_patterns(patterns)?),
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.globset
            .as_ref()
            .is_some_and(|globset| globset.is_match(path))
    }

    pub fn len(&self) -> usize {
        self.globset.as_ref().map_or(0, GlobSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Filter for GlobFilter {
    fn filter(&self, files: FileSet) -> FileSet {
        match &self.globset {
            None => files,
            Some(globset) => exclude_matching(files, self.name(), |path| globset.is_match(path)),
        }
    }

    fn name(&self) -> &'static str {
        "GlobFilter"
    }
}

/// Compile a list of glob patterns into a GlobSet
fn compile_glob_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| FilesError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }

    let globset = builder.build().map_err(|source| FilesError::InvalidGlob {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })?;

    tracing::debug!("Compiled {} glob patterns into GlobSet", patterns.len());
    Ok(globset)
}

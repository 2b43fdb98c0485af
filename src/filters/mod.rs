//! Filters over file sets
//!
//! This module provides a consistent interface for narrowing a [`FileSet`].
//! All filters implement the [`Filter`] trait so the pipeline can fold an
//! ordered list of them over its input. Filters only ever remove paths.
//!
//! ## Available Filters
//!
//! - **GlobFilter** - exclude paths matching any glob pattern
//! - **PrefixFilter** - exclude paths starting with any prefix
//! - **RegexFilter** - exclude paths fully matching any regular expression
//! - **LanguageFilter** - keep only paths belonging to a set of languages
//!
//! Pattern compilation happens when a filter is built, so a malformed pattern
//! surfaces as an error before any path is examined.

pub mod glob;
pub mod language;
pub mod prefix;
pub mod regex;

pub use self::glob::GlobFilter;
pub use self::language::LanguageFilter;
pub use self::prefix::PrefixFilter;
pub use self::regex::RegexFilter;

use crate::files::FileSet;

/// Common trait for all file set filters
pub trait Filter {
    /// Apply the filter, returning the surviving paths
    fn filter(&self, files: FileSet) -> FileSet;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}

/// Fold an ordered list of filters over a file set
pub fn apply_all(filters: &[Box<dyn Filter>], files: FileSet) -> FileSet {
    filters.iter().fold(files, |files, filter| {
        let before = files.len();
        let survivors = filter.filter(files);
        tracing::debug!(
            "{} kept {} of {} files",
            filter.name(),
            survivors.len(),
            before
        );
        survivors
    })
}

/// Remove every path for which `is_match` holds
pub(crate) fn exclude_matching(
    files: FileSet,
    filter_name: &str,
    is_match: impl Fn(&str) -> bool,
) -> FileSet {
    files.retain(|path| {
        let matched = is_match(path);
        if matched {
            tracing::trace!("{}: excluded {}", filter_name, path);
        }
        !matched
    })
}

use crate::error::{FilesError, Result};
use crate::files::FileSet;
use crate::filters::{Filter, exclude_matching};
use regex::{Regex, RegexSet};

/// Regex Filter - exclusion by anchored regular expression
///
/// Each expression must match the whole path, not a substring of it. The
/// expressions are wrapped in `^(?:...)$` and compiled into one RegexSet.
pub struct RegexFilter {
    patterns: RegexSet,
}

impl RegexFilter {
    pub fn new<S: AsRef<str>>(expressions: &[S]) -> Result<Self> {
        let anchored: Vec<String> = expressions
            .iter()
            .map(|expression| anchor(expression.as_ref()))
            .collect();

        let patterns =
            RegexSet::new(&anchored).map_err(|source| invalid_expression(expressions, source))?;

        tracing::debug!("Compiled {} default-ignore expressions", patterns.len());
        Ok(Self { patterns })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.patterns.is_match(path)
    }
}

impl Filter for RegexFilter {
    fn filter(&self, files: FileSet) -> FileSet {
        if self.patterns.is_empty() {
            return files;
        }
        exclude_matching(files, self.name(), |path| self.is_match(path))
    }

    fn name(&self) -> &'static str {
        "RegexFilter"
    }
}

fn anchor(expression: &str) -> String {
    format!("^(?:{})$", expression)
}

/// Name the offending expression; the set error alone does not say which one
fn invalid_expression<S: AsRef<str>>(expressions: &[S], set_error: regex::Error) -> FilesError {
    expressions
        .iter()
        .find_map(|expression| {
            let expression = expression.as_ref();
            Regex::new(&anchor(expression))
                .err()
                .map(|source| FilesError::InvalidRegex {
                    pattern: expression.to_string(),
                    source,
                })
        })
        .unwrap_or_else(|| FilesError::InvalidRegex {
            pattern: expressions
                .iter()
                .map(|expression| expression.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            source: set_error,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_required() {
        let filter = RegexFilter::new(&[r"vendor/.*"]).unwrap();

        assert!(filter.is_match("vendor/a.js"));
        assert!(!filter.is_match("src/vendor/a.js"));
    }

    #[test]
    fn test_explicit_anchors_still_work() {
        let filter = RegexFilter::new(&[r".*\.class$"]).unwrap();

        assert!(filter.is_match("b.class"));
        assert!(filter.is_match("target/out.class"));
        assert!(!filter.is_match("b.classic"));
    }

    #[test]
    fn test_alternation_is_grouped() {
        // Without grouping, `^a|b$` would match any path starting with `a`
        let filter = RegexFilter::new(&["a|b"]).unwrap();

        assert!(filter.is_match("a"));
        assert!(filter.is_match("b"));
        assert!(!filter.is_match("abc"));
    }

    #[test]
    fn test_invalid_regex_is_an_error() {
        let result = RegexFilter::new(&[r".*\.class", "(unclosed"]);

        match result {
            Err(FilesError::InvalidRegex { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            _ => panic!("expected an invalid regex error"),
        }
    }

    #[test]
    fn test_any_expression_in_set_matches() {
        let filter = RegexFilter::new(&[r".*\.class", r"vendor/.*", r"build"]).unwrap();

        assert!(filter.is_match("a/b.class"));
        assert!(filter.is_match("vendor/x.js"));
        assert!(filter.is_match("build"));
        assert!(!filter.is_match("build/main.rs"));
    }

    #[test]
    fn test_filter_removes_matches() {
        let filter = RegexFilter::new(&[r".*\.class"]).unwrap();
        let files: FileSet = ["a.scala", "b.class"].into_iter().collect();

        assert_eq!(filter.filter(files).iter().collect::<Vec<_>>(), vec!["a.scala"]);
    }
}

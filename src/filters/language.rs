use crate::files::FileSet;
use crate::filters::Filter;
use crate::languages::{CustomExtensions, ExtensionResolver, Language};
use std::collections::BTreeSet;

/// Language Filter - keeps only files of the given languages
///
/// Unlike the exclusion filters this one is an allow-list: a path survives
/// only if it resolves to at least one of `languages`. Paths with unknown
/// extensions never survive.
pub struct LanguageFilter {
    languages: BTreeSet<Language>,
    resolver: ExtensionResolver,
}

impl LanguageFilter {
    pub fn new(languages: &BTreeSet<Language>, custom_extensions: &CustomExtensions) -> Self {
        Self {
            languages: languages.clone(),
            resolver: ExtensionResolver::new(custom_extensions),
        }
    }

    pub fn accepts(&self, path: &str) -> bool {
        self.languages
            .iter()
            .any(|language| self.resolver.matches(*language, path))
    }
}

impl Filter for LanguageFilter {
    fn filter(&self, files: FileSet) -> FileSet {
        files.retain(|path| {
            let accepted = self.accepts(path);
            if !accepted {
                tracing::trace!("{}: excluded {}", self.name(), path);
            }
            accepted
        })
    }

    fn name(&self) -> &'static str {
        "LanguageFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_supported_languages() {
        let languages = BTreeSet::from([Language::Python]);
        let filter = LanguageFilter::new(&languages, &CustomExtensions::new());
        let files: FileSet = ["a.py", "b.scala", "c", "stubs/d.pyi"].into_iter().collect();

        let survivors = filter.filter(files);

        assert_eq!(survivors.iter().collect::<Vec<_>>(), vec!["a.py", "stubs/d.pyi"]);
    }

    #[test]
    fn test_custom_extensions_are_honored() {
        let languages = BTreeSet::from([Language::Scala]);
        let custom = CustomExtensions::from([(
            Language::Scala,
            BTreeSet::from([".sc".to_string()]),
        )]);
        let filter = LanguageFilter::new(&languages, &custom);

        assert!(filter.accepts("build.sc"));
        assert!(filter.accepts("Main.scala"));
        assert!(!filter.accepts("x.py"));
    }

    #[test]
    fn test_no_languages_keeps_nothing() {
        let filter = LanguageFilter::new(&BTreeSet::new(), &CustomExtensions::new());
        let files: FileSet = ["a.py"].into_iter().collect();

        assert!(filter.filter(files).is_empty());
    }
}

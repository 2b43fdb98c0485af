//! Languages and extension resolution
//!
//! This module contains the canonical file-extension table for each supported
//! language, plus the custom-extension overlay that local and remote
//! configuration can contribute.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A programming or configuration language a tool can analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Apex,
    C,
    CPP,
    CSharp,
    CSS,
    Dart,
    Dockerfile,
    Elixir,
    Go,
    Groovy,
    Haskell,
    HTML,
    Java,
    Javascript,
    JSON,
    Kotlin,
    Markdown,
    ObjectiveC,
    PHP,
    PowerShell,
    Python,
    Ruby,
    Rust,
    Scala,
    Shell,
    SQL,
    Swift,
    Terraform,
    TypeScript,
    XML,
    YAML,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Apex,
        Language::C,
        Language::CPP,
        Language::CSharp,
        Language::CSS,
        Language::Dart,
        Language::Dockerfile,
        Language::Elixir,
        Language::Go,
        Language::Groovy,
        Language::Haskell,
        Language::HTML,
        Language::Java,
        Language::Javascript,
        Language::JSON,
        Language::Kotlin,
        Language::Markdown,
        Language::ObjectiveC,
        Language::PHP,
        Language::PowerShell,
        Language::Python,
        Language::Ruby,
        Language::Rust,
        Language::Scala,
        Language::Shell,
        Language::SQL,
        Language::Swift,
        Language::Terraform,
        Language::TypeScript,
        Language::XML,
        Language::YAML,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Apex => "Apex",
            Language::C => "C",
            Language::CPP => "CPP",
            Language::CSharp => "CSharp",
            Language::CSS => "CSS",
            Language::Dart => "Dart",
            Language::Dockerfile => "Dockerfile",
            Language::Elixir => "Elixir",
            Language::Go => "Go",
            Language::Groovy => "Groovy",
            Language::Haskell => "Haskell",
            Language::HTML => "HTML",
            Language::Java => "Java",
            Language::Javascript => "Javascript",
            Language::JSON => "JSON",
            Language::Kotlin => "Kotlin",
            Language::Markdown => "Markdown",
            Language::ObjectiveC => "ObjectiveC",
            Language::PHP => "PHP",
            Language::PowerShell => "PowerShell",
            Language::Python => "Python",
            Language::Ruby => "Ruby",
            Language::Rust => "Rust",
            Language::Scala => "Scala",
            Language::Shell => "Shell",
            Language::SQL => "SQL",
            Language::Swift => "Swift",
            Language::Terraform => "Terraform",
            Language::TypeScript => "TypeScript",
            Language::XML => "XML",
            Language::YAML => "YAML",
        }
    }

    /// Canonical extensions, always with a leading dot
    pub fn canonical_extensions(self) -> &'static [&'static str] {
        match self {
            Language::Apex => &[".cls", ".trigger"],
            Language::C => &[".c", ".h"],
            Language::CPP => &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx", ".h"],
            Language::CSharp => &[".cs"],
            Language::CSS => &[".css", ".scss", ".less"],
            Language::Dart => &[".dart"],
            Language::Dockerfile => &[".dockerfile"],
            Language::Elixir => &[".ex", ".exs"],
            Language::Go => &[".go"],
            Language::Groovy => &[".groovy", ".gradle"],
            Language::Haskell => &[".hs", ".lhs"],
            Language::HTML => &[".html", ".htm"],
            Language::Java => &[".java"],
            Language::Javascript => &[".js", ".jsx", ".mjs", ".cjs", ".vue"],
            Language::JSON => &[".json"],
            Language::Kotlin => &[".kt", ".kts"],
            Language::Markdown => &[".md", ".markdown"],
            Language::ObjectiveC => &[".m", ".mm"],
            Language::PHP => &[".php", ".phtml"],
            Language::PowerShell => &[".ps1", ".psm1", ".psd1"],
            Language::Python => &[".py", ".pyi"],
            Language::Ruby => &[".rb", ".gemspec", ".rake"],
            Language::Rust => &[".rs"],
            Language::Scala => &[".scala"],
            Language::Shell => &[".sh", ".bash", ".zsh"],
            Language::SQL => &[".sql"],
            Language::Swift => &[".swift"],
            Language::Terraform => &[".tf", ".tfvars"],
            Language::TypeScript => &[".ts", ".tsx", ".mts", ".cts"],
            Language::XML => &[".xml", ".xsd", ".xsl"],
            Language::YAML => &[".yml", ".yaml"],
        }
    }

    /// Exact file names recognized regardless of extension
    pub fn canonical_filenames(self) -> &'static [&'static str] {
        match self {
            Language::Dockerfile => &["Dockerfile"],
            Language::Ruby => &["Gemfile", "Rakefile"],
            _ => &[],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown language '{}'", wanted))
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.name().to_string()
    }
}

/// Per-language custom extensions
pub type CustomExtensions = BTreeMap<Language, BTreeSet<String>>;

/// Overlay remote custom extensions onto local ones
///
/// Starts from the local map, then replaces each language entry present in the
/// remote map. Remote wins for the same language key; languages only present
/// locally are kept.
pub fn merge_custom_extensions(
    local: &CustomExtensions,
    remote: &CustomExtensions,
) -> CustomExtensions {
    let mut merged = local.clone();
    for (language, extensions) in remote {
        merged.insert(*language, extensions.clone());
    }
    merged
}

/// Normalize a configured extension so it carries a leading dot
pub fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim();
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

/// Resolves file paths to languages using canonical plus custom extensions
#[derive(Debug, Clone)]
pub struct ExtensionResolver {
    extensions: BTreeMap<Language, BTreeSet<String>>,
}

impl ExtensionResolver {
    /// Custom extensions extend the canonical set of their language
    pub fn new(custom: &CustomExtensions) -> Self {
        let mut extensions: BTreeMap<Language, BTreeSet<String>> = Language::ALL
            .iter()
            .map(|language| {
                let canonical = language
                    .canonical_extensions()
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect();
                (*language, canonical)
            })
            .collect();

        for (language, custom_extensions) in custom {
            extensions
                .entry(*language)
                .or_default()
                .extend(custom_extensions.iter().map(|ext| normalize_extension(ext)));
        }

        Self { extensions }
    }

    pub fn extensions(&self, language: Language) -> impl Iterator<Item = &str> {
        self.extensions
            .get(&language)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether a root-relative path belongs to `language`
    pub fn matches(&self, language: Language, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);

        language.canonical_filenames().contains(&file_name)
            || self.extensions(language).any(|ext| file_name.ends_with(ext))
    }

    /// All languages a path resolves to
    pub fn languages_for(&self, path: &str) -> BTreeSet<Language> {
        Language::ALL
            .iter()
            .copied()
            .filter(|language| self.matches(*language, path))
            .collect()
    }
}

impl Default for ExtensionResolver {
    fn default() -> Self {
        Self::new(&CustomExtensions::new())
    }
}

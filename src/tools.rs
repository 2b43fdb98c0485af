//! Analysis tool descriptors
//!
//! A [`Tool`] names the languages it analyzes and the configuration files it
//! recognizes. The collector only uses these to decide which files a tool
//! receives; it never runs the tool.

use crate::error::{FilesError, Result};
use crate::languages::Language;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::BTreeSet;

/// Descriptor of an analysis tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: String,
    pub supported_languages: BTreeSet<Language>,
    pub config_filenames: BTreeSet<String>,
}

impl Tool {
    pub fn new<L, F>(name: impl Into<String>, languages: L, config_filenames: F) -> Self
    where
        L: IntoIterator<Item = Language>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            name: name.into(),
            supported_languages: languages.into_iter().collect(),
            config_filenames: config_filenames.into_iter().map(Into::into).collect(),
        }
    }
}

lazy_static! {
    static ref BUILTIN_TOOLS: Vec<Tool> = vec![
        Tool::new(
            "eslint",
            [Language::Javascript, Language::TypeScript],
            [
                ".eslintrc",
                ".eslintrc.js",
                ".eslintrc.cjs",
                ".eslintrc.json",
                ".eslintrc.yml",
                ".eslintrc.yaml",
                "eslint.config.js",
                "eslint.config.mjs",
            ],
        ),
        Tool::new(
            "prettier",
            [
                Language::Javascript,
                Language::TypeScript,
                Language::CSS,
                Language::JSON,
                Language::Markdown,
                Language::YAML,
            ],
            [".prettierrc", ".prettierrc.json", ".prettierrc.yml", "prettier.config.js"],
        ),
        Tool::new("biome", [Language::Javascript, Language::TypeScript, Language::JSON], ["biome.json"]),
        Tool::new("clippy", [Language::Rust], ["clippy.toml", ".clippy.toml"]),
        Tool::new("rustfmt", [Language::Rust], ["rustfmt.toml", ".rustfmt.toml"]),
        Tool::new("ruff", [Language::Python], ["ruff.toml", ".ruff.toml", "pyproject.toml"]),
        Tool::new("pylint", [Language::Python], ["pylintrc", ".pylintrc"]),
        Tool::new("mypy", [Language::Python], ["mypy.ini", ".mypy.ini"]),
        Tool::new("scalastyle", [Language::Scala], ["scalastyle_config.xml", "scalastyle-config.xml"]),
        Tool::new("scalafmt", [Language::Scala], [".scalafmt.conf"]),
        Tool::new("golangci-lint", [Language::Go], [".golangci.yml", ".golangci.yaml", ".golangci.toml"]),
        Tool::new("hadolint", [Language::Dockerfile], [".hadolint.yaml", ".hadolint.yml"]),
        Tool::new("shellcheck", [Language::Shell], [".shellcheckrc"]),
        Tool::new("rubocop", [Language::Ruby], [".rubocop.yml"]),
        Tool::new("checkstyle", [Language::Java], ["checkstyle.xml"]),
        Tool::new("detekt", [Language::Kotlin], ["detekt.yml", "default-detekt-config.yml"]),
        Tool::new("stylelint", [Language::CSS], [".stylelintrc", ".stylelintrc.json", "stylelint.config.js"]),
        Tool::new("markdownlint", [Language::Markdown], [".markdownlint.json", ".markdownlint.yaml", ".markdownlintrc"]),
        Tool::new("tflint", [Language::Terraform], [".tflint.hcl"]),
        Tool::new("sqlfluff", [Language::SQL], [".sqlfluff"]),
    ];
}

/// Lookup of tool descriptors by name
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Registry of the tools known out of the box
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TOOLS.clone())
    }

    /// Add a tool, replacing any existing one with the same name
    pub fn register(&mut self, tool: Tool) {
        self.tools.retain(|existing| !existing.name.eq_ignore_ascii_case(&tool.name));
        self.tools.push(tool);
    }

    /// Find a tool by name, ignoring case
    pub fn get(&self, name: &str) -> Result<&Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FilesError::UnknownTool(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }
}

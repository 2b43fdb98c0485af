//! Local project configuration
//!
//! Read from the first existing file in the analysis root among the configured
//! names (`.filescope.yaml` by default). The file format is chosen from the
//! extension; anything unrecognized is read as YAML.

use super::ConfigSource;
use crate::languages::{CustomExtensions, Language, normalize_extension};
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Project configuration supplied by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfiguration {
    /// Globs excluded for every tool
    pub exclude_paths: Vec<String>,

    /// Per-tool settings, keyed by tool name
    pub engines: BTreeMap<String, EngineConfiguration>,

    /// Per-language custom extensions, keyed by language name
    pub languages: BTreeMap<String, LanguageConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfiguration {
    pub exclude_paths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfiguration {
    pub extensions: Vec<String>,
}

impl LocalConfiguration {
    /// Exclude globs registered for a tool; tool names compare case-insensitively
    pub fn tool_exclude_paths(&self, tool_name: &str) -> &[String] {
        self.engines
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tool_name))
            .map(|(_, engine)| engine.exclude_paths.as_slice())
            .unwrap_or(&[])
    }

    /// Custom extensions per known language; unknown language names are skipped
    pub fn custom_extensions(&self) -> CustomExtensions {
        self.languages
            .iter()
            .filter_map(|(name, config)| {
                let language = parse_language(name)?;
                let extensions: BTreeSet<String> = config
                    .extensions
                    .iter()
                    .map(|ext| normalize_extension(ext))
                    .collect();
                Some((language, extensions))
            })
            .collect()
    }
}

fn parse_language(name: &str) -> Option<Language> {
    match name.parse() {
        Ok(language) => Some(language),
        Err(reason) => {
            tracing::warn!("Ignoring local extensions: {}", reason);
            None
        }
    }
}

/// Load local configuration from the first existing candidate file under `root`
pub fn load<S: AsRef<str>>(root: &Path, candidates: &[S]) -> ConfigSource<LocalConfiguration> {
    let Some(path) = candidates
        .iter()
        .map(|name| root.join(name.as_ref()))
        .find(|path| path.is_file())
    else {
        tracing::debug!("No local configuration found under {}", root.display());
        return ConfigSource::Absent;
    };

    match load_file(&path) {
        Ok(config) => {
            tracing::info!("Loaded local configuration from {}", path.display());
            ConfigSource::Available(config)
        }
        Err(reason) => {
            tracing::warn!(
                "Ignoring invalid local configuration {}: {}",
                path.display(),
                reason
            );
            ConfigSource::Invalid(reason)
        }
    }
}

/// Parse a single configuration file, choosing the format from its extension
pub fn load_file(path: &Path) -> Result<LocalConfiguration, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    if content.trim().is_empty() {
        return Ok(LocalConfiguration::default());
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let figment = match extension.as_str() {
        "toml" => Figment::from(Toml::string(&content)),
        "json" => Figment::from(Json::string(&content)),
        _ => Figment::from(Yaml::string(&content)),
    };

    figment.extract().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NAMES: &[&str] = &[".filescope.yaml", ".filescope.yml", ".filescope.toml", ".filescope.json"];

    #[test]
    fn test_absent_when_no_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(load(temp_dir.path(), NAMES), ConfigSource::Absent);
    }

    #[test]
    fn test_yaml_configuration() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".filescope.yaml"),
            r#"
exclude_paths:
  - "target/**"
engines:
  eslint:
    exclude_paths:
      - "legacy/**"
languages:
  scala:
    extensions: ["sc", ".sbt"]
"#,
        )
        .unwrap();

        let config = load(temp_dir.path(), NAMES);
        let config = config.available().expect("configuration should load");

        assert_eq!(config.exclude_paths, vec!["target/**"]);
        assert_eq!(config.tool_exclude_paths("ESLint"), ["legacy/**".to_string()]);
        assert!(config.tool_exclude_paths("ruff").is_empty());
        assert_eq!(
            config.custom_extensions()[&Language::Scala],
            BTreeSet::from([".sc".to_string(), ".sbt".to_string()])
        );
    }

    #[test]
    fn test_toml_and_json_configuration() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".filescope.toml"),
            "exclude_paths = [\"docs/**\"]\n",
        )
        .unwrap();
        let config = load(temp_dir.path(), NAMES);
        assert_eq!(config.available().unwrap().exclude_paths, vec!["docs/**"]);

        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".filescope.json"),
            r#"{"engines": {"ruff": {"exclude_paths": ["migrations/**"]}}}"#,
        )
        .unwrap();
        let config = load(temp_dir.path(), NAMES);
        assert_eq!(
            config.available().unwrap().tool_exclude_paths("ruff"),
            ["migrations/**".to_string()]
        );
    }

    #[test]
    fn test_first_candidate_wins() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".filescope.yaml"), "exclude_paths: [\"a/**\"]\n").unwrap();
        fs::write(temp_dir.path().join(".filescope.json"), r#"{"exclude_paths": ["b/**"]}"#).unwrap();

        let config = load(temp_dir.path(), NAMES);
        assert_eq!(config.available().unwrap().exclude_paths, vec!["a/**"]);
    }

    #[test]
    fn test_empty_file_is_available_and_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".filescope.yaml"), "\n").unwrap();

        let config = load(temp_dir.path(), NAMES);
        assert_eq!(config, ConfigSource::Available(LocalConfiguration::default()));
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".filescope.yaml"),
            "exclude_paths: {not: [a, list\n",
        )
        .unwrap();

        assert!(matches!(
            load(temp_dir.path(), NAMES),
            ConfigSource::Invalid(_)
        ));
    }

    #[test]
    fn test_unknown_language_keeps_other_rules() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".filescope.yaml"),
            r#"
exclude_paths: ["target/**"]
languages:
  lua:
    extensions: [".lua"]
  scala:
    extensions: [".sc"]
"#,
        )
        .unwrap();

        let config = load(temp_dir.path(), NAMES);
        let config = config.available().expect("unknown language should not invalidate the file");

        assert_eq!(config.exclude_paths, vec!["target/**"]);
        let custom = config.custom_extensions();
        assert_eq!(custom.len(), 1);
        assert!(custom[&Language::Scala].contains(".sc"));
    }
}

//! Remote project configuration
//!
//! The payload is fetched by the caller; this module only turns it into a
//! [`ConfigSource`]. Field names follow the service's camelCase JSON.

use super::ConfigSource;
use crate::languages::{CustomExtensions, Language, normalize_extension};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project configuration held by the remote service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteConfiguration {
    /// Path prefixes ignored for every tool
    pub ignored_paths: Vec<String>,

    /// Platform default-ignore expressions, applied only without local configuration
    pub default_ignores: Vec<String>,

    /// Per-language extension overrides
    pub project_extensions: Vec<ProjectExtensions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectExtensions {
    /// Language name as sent by the service
    pub language: String,
    pub extensions: Vec<String>,
}

impl RemoteConfiguration {
    /// Entries for the same language are combined; unknown languages are skipped
    pub fn custom_extensions(&self) -> CustomExtensions {
        let mut custom = CustomExtensions::new();
        for entry in &self.project_extensions {
            let language: Language = match entry.language.parse() {
                Ok(language) => language,
                Err(reason) => {
                    tracing::warn!("Ignoring remote extensions: {}", reason);
                    continue;
                }
            };
            custom
                .entry(language)
                .or_default()
                .extend(entry.extensions.iter().map(|ext| normalize_extension(ext)));
        }
        custom
    }
}

/// Parse an already-fetched JSON payload
pub fn from_json(payload: &str) -> ConfigSource<RemoteConfiguration> {
    match serde_json::from_str(payload) {
        Ok(config) => ConfigSource::Available(config),
        Err(e) => {
            tracing::warn!("Ignoring invalid remote configuration: {}", e);
            ConfigSource::Invalid(e.to_string())
        }
    }
}

/// Read a JSON payload saved to disk
pub fn load(path: &Path) -> ConfigSource<RemoteConfiguration> {
    match std::fs::read_to_string(path) {
        Ok(payload) => from_json(&payload),
        Err(e) => {
            tracing::warn!(
                "Could not read remote configuration {}: {}",
                path.display(),
                e
            );
            ConfigSource::Invalid(format!("failed to read {}: {}", path.display(), e))
        }
    }
}

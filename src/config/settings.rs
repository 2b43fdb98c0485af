use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Settings for the command-line front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Version control directory skipped at the root
    pub vcs_directory: String,

    /// Local configuration file names, tried in order
    pub local_config_files: Vec<String>,

    /// Saved remote configuration payload
    #[serde(default)]
    pub remote_config: Option<PathBuf>,
}

impl Settings {
    /// Load settings: embedded defaults, user config, custom file, then `FILESCOPE_` env vars
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("Loading settings");

        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(Self::user_config_path()));

        if let Some(path) = custom_config {
            if !std::path::Path::new(path).is_file() {
                anyhow::bail!("Configuration file not found: {}", path);
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("FILESCOPE_"));

        let settings: Settings = figment.extract()?;
        tracing::trace!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/filescope/config.toml", home),
            Err(_) => "~/.config/filescope/config.toml".to_string(),
        }
    }
}

//! Configuration sources
//!
//! Two project-level sources feed the collector, each independently optional:
//!
//! - **Local** configuration, read from a file in the analysis root
//! - **Remote** configuration, a JSON payload fetched by the caller
//!
//! Both are wrapped in [`ConfigSource`] so every stage handles the
//! absent/invalid case explicitly. Only [`ConfigSource::Available`] contributes
//! rules. [`Settings`] is separate: it configures the CLI itself.

pub mod local;
pub mod remote;
pub mod settings;

pub use local::{EngineConfiguration, LanguageConfiguration, LocalConfiguration};
pub use remote::{ProjectExtensions, RemoteConfiguration};
pub use settings::Settings;

/// A configuration value that may be missing or unusable
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource<T> {
    /// Parsed successfully
    Available(T),
    /// No configuration was provided
    Absent,
    /// Configuration was provided but could not be used
    Invalid(String),
}

impl<T> ConfigSource<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            ConfigSource::Available(value) => Some(value),
            ConfigSource::Absent | ConfigSource::Invalid(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ConfigSource::Available(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            ConfigSource::Available(_) => "available",
            ConfigSource::Absent => "absent",
            ConfigSource::Invalid(_) => "invalid",
        }
    }
}

impl<T> From<Option<T>> for ConfigSource<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConfigSource::Absent, ConfigSource::Available)
    }
}

//! Command implementations for the filescope CLI
//!
//! Each command lives in its own module. Shared here: the output format flag
//! and loading of the two configuration sources for a root.

pub mod config;
pub mod filter;
pub mod list;
pub mod tools;

use crate::cli::Output;
use crate::config::{ConfigSource, LocalConfiguration, RemoteConfiguration, Settings, local, remote};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments shared by commands that operate on a project root
#[derive(Args, Debug, Clone)]
pub struct RootArgs {
    /// Project root to analyze
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Saved remote configuration (JSON), overrides the settings value
    #[arg(long, value_name = "FILE")]
    pub remote_config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Both configuration sources for one run
pub struct Sources {
    pub local: ConfigSource<LocalConfiguration>,
    pub remote: ConfigSource<RemoteConfiguration>,
}

impl Sources {
    pub fn load(args: &RootArgs, settings: &Settings, output: &Output) -> Self {
        let local = local::load(&args.root, settings.local_config_files.as_slice());
        let remote = match args.remote_config.as_ref().or(settings.remote_config.as_ref()) {
            Some(path) => remote::load(path),
            None => ConfigSource::Absent,
        };

        report_source("Local configuration", &local, output);
        report_source("Remote configuration", &remote, output);

        Self { local, remote }
    }
}

fn report_source<T>(label: &str, source: &ConfigSource<T>, output: &Output) {
    match source {
        ConfigSource::Invalid(reason) => {
            output.warning(&format!("{} ignored: {}", label, reason));
        }
        _ => output.verbose(&format!("{}: {}", label, source.status())),
    }
}

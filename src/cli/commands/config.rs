//! `filescope config`

use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Print the effective settings after all layers are merged
pub fn execute(settings: &Settings, output: &Output) -> Result<()> {
    output.raw(&serde_json::to_string_pretty(settings)?);
    Ok(())
}

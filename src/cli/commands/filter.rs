//! `filescope filter`

use super::{OutputFormat, RootArgs, Sources};
use crate::cli::Output;
use crate::collector::FileCollector;
use crate::config::Settings;
use crate::permissions::TracingSink;
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Tool to select files for (see `filescope tools`)
    #[arg(long, short = 't', value_name = "NAME")]
    pub tool: String,
}

pub fn execute(args: FilterArgs, settings: &Settings, output: &Output) -> Result<()> {
    let registry = ToolRegistry::builtin();
    let tool = registry.get(&args.tool)?;

    let sources = Sources::load(&args.root, settings, output);
    let collector = FileCollector::new(settings.vcs_directory.as_str());

    let target = collector
        .list(&args.root.root, &sources.local, &sources.remote, &mut TracingSink)
        .with_context(|| format!("Failed to list files under {}", args.root.root.display()))?;
    // Checked before the language filter, which drops most config files
    let has_configuration = FileCollector::has_configuration_files(tool, &target);
    let target = collector.filter(tool, target, &sources.local, &sources.remote)?;

    match args.root.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "tool": tool.name,
                "has_configuration_files": has_configuration,
                "target": target,
            });
            output.raw(&serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            super::list::print_target(&target, output);
            if has_configuration {
                output.success(&format!("{} configuration file found", tool.name));
            } else {
                output.info(&format!("No {} configuration file in the project", tool.name));
            }
        }
    }

    Ok(())
}

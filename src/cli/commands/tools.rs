//! `filescope tools`

use super::OutputFormat;
use crate::cli::Output;
use crate::languages::ExtensionResolver;
use crate::tools::ToolRegistry;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ToolsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: ToolsArgs, output: &Output) -> Result<()> {
    let registry = ToolRegistry::builtin();

    if args.format == OutputFormat::Json {
        let tools: Vec<_> = registry.iter().collect();
        output.raw(&serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    let resolver = ExtensionResolver::default();
    output.section_header("Tools", registry.iter().count());
    for tool in registry.iter() {
        let extensions: Vec<&str> = tool
            .supported_languages
            .iter()
            .flat_map(|language| resolver.extensions(*language))
            .collect();
        output.file(&tool.name);
        output.key_value("extensions", &extensions.join(" "), false);
        if !tool.config_filenames.is_empty() {
            let names: Vec<&str> = tool.config_filenames.iter().map(String::as_str).collect();
            output.key_value("config files", &names.join(" "), false);
        }
    }

    Ok(())
}

//! `filescope list`

use super::{OutputFormat, RootArgs, Sources};
use crate::cli::Output;
use crate::collector::FileCollector;
use crate::config::Settings;
use crate::files::FilesTarget;
use crate::permissions::Diagnostic;
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub root: RootArgs,
}

pub fn execute(args: ListArgs, settings: &Settings, output: &Output) -> Result<()> {
    let sources = Sources::load(&args.root, settings, output);
    let collector = FileCollector::new(settings.vcs_directory.as_str());

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let target = collector
        .list(&args.root.root, &sources.local, &sources.remote, &mut diagnostics)
        .with_context(|| format!("Failed to list files under {}", args.root.root.display()))?;

    for diagnostic in &diagnostics {
        output.warning(&diagnostic.to_string());
    }

    match args.root.format {
        OutputFormat::Json => output.raw(&serde_json::to_string_pretty(&target)?),
        OutputFormat::Text => print_target(&target, output),
    }

    Ok(())
}

/// Text rendering shared with `filter`
pub(super) fn print_target(target: &FilesTarget, output: &Output) {
    output.section_header("Readable files", target.readable_files.len());
    for path in target.readable_files.iter() {
        output.file(path);
    }

    if !target.unreadable_files.is_empty() {
        output.section_header("Unreadable files", target.unreadable_files.len());
        for path in target.unreadable_files.iter() {
            output.file(path);
        }
    }
}

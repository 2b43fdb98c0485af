use crate::config::{ConfigSource, LocalConfiguration, RemoteConfiguration};
use crate::error::Result;
use crate::files::FilesTarget;
use crate::filters::{self, Filter, GlobFilter, LanguageFilter};
use crate::languages::{CustomExtensions, merge_custom_extensions};
use crate::tools::Tool;

/// Build the per-tool filters, in application order
///
/// 1. Local `engines.<tool>.exclude_paths` globs
/// 2. Language allow-list for the tool's supported languages, resolving
///    extensions with local custom extensions overlaid by remote ones
pub fn tool_filters(
    tool: &Tool,
    local: &ConfigSource<LocalConfiguration>,
    remote: &ConfigSource<RemoteConfiguration>,
) -> Result<Vec<Box<dyn Filter>>> {
    let tool_excludes = local
        .available()
        .map(|config| config.tool_exclude_paths(&tool.name))
        .unwrap_or(&[]);

    let local_extensions = local
        .available()
        .map(LocalConfiguration::custom_extensions)
        .unwrap_or_default();
    let remote_extensions = remote
        .available()
        .map(RemoteConfiguration::custom_extensions)
        .unwrap_or_default();
    let custom: CustomExtensions = merge_custom_extensions(&local_extensions, &remote_extensions);

    Ok(vec![
        Box::new(GlobFilter::new(tool_excludes)?),
        Box::new(LanguageFilter::new(&tool.supported_languages, &custom)),
    ])
}

/// Narrow a target's readable files to what `tool` should receive
///
/// Unreadable files are passed through untouched.
pub fn filter_for_tool(
    tool: &Tool,
    target: FilesTarget,
    local: &ConfigSource<LocalConfiguration>,
    remote: &ConfigSource<RemoteConfiguration>,
) -> Result<FilesTarget> {
    let filters = tool_filters(tool, local, remote)?;
    let readable = filters::apply_all(&filters, target.readable_files.clone());

    tracing::debug!(
        "Tool {}: {} of {} readable files selected",
        tool.name,
        readable.len(),
        target.readable_files.len()
    );
    Ok(target.with_readable_files(readable))
}

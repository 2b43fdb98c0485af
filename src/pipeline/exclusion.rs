use crate::config::{ConfigSource, LocalConfiguration, RemoteConfiguration};
use crate::error::Result;
use crate::files::FileSet;
use crate::filters::{self, Filter, GlobFilter, PrefixFilter, RegexFilter};

/// Build the project-wide exclusion filters, in application order
///
/// 1. Local `exclude_paths` globs
/// 2. Remote `ignoredPaths` prefixes
/// 3. Remote `defaultIgnores` expressions, see [`default_ignore_filter`]
///
/// A source that is absent or invalid contributes an empty, identity filter.
pub fn exclusion_filters(
    local: &ConfigSource<LocalConfiguration>,
    remote: &ConfigSource<RemoteConfiguration>,
) -> Result<Vec<Box<dyn Filter>>> {
    let exclude_paths = local
        .available()
        .map(|config| config.exclude_paths.as_slice())
        .unwrap_or(&[]);
    let ignored_paths = remote
        .available()
        .map(|config| config.ignored_paths.as_slice())
        .unwrap_or(&[]);

    let mut filters: Vec<Box<dyn Filter>> = vec![
        Box::new(GlobFilter::new(exclude_paths)?),
        Box::new(PrefixFilter::new(ignored_paths)),
    ];

    if let Some(defaults) = default_ignore_filter(local, remote)? {
        filters.push(Box::new(defaults));
    }

    Ok(filters)
}

/// Platform default ignores, active only without a usable local configuration
///
/// A valid local configuration is taken as the complete statement of what to
/// exclude, so the remote defaults are not layered on top of it. Returns
/// `None` when the filter does not apply or has no expressions.
pub fn default_ignore_filter(
    local: &ConfigSource<LocalConfiguration>,
    remote: &ConfigSource<RemoteConfiguration>,
) -> Result<Option<RegexFilter>> {
    if local.is_available() {
        tracing::debug!("Local configuration present, default ignores not applied");
        return Ok(None);
    }

    let expressions = remote
        .available()
        .map(|config| config.default_ignores.as_slice())
        .unwrap_or(&[]);
    if expressions.is_empty() {
        return Ok(None);
    }

    tracing::debug!(
        "Local configuration {}, applying {} default ignores",
        local.status(),
        expressions.len()
    );
    Ok(Some(RegexFilter::new(expressions)?))
}

/// Run the exclusion pipeline over the enumerated files
pub fn exclude(
    files: FileSet,
    local: &ConfigSource<LocalConfiguration>,
    remote: &ConfigSource<RemoteConfiguration>,
) -> Result<FileSet> {
    let filters = exclusion_filters(local, remote)?;
    Ok(filters::apply_all(&filters, files))
}

//! File collection for analysis runs
//!
//! [`FileCollector`] ties the stages together:
//!
//! ```text
//! list:   walk root ─▶ exclusion pipeline ─▶ permission check ─▶ FilesTarget
//! filter: FilesTarget.readable ─▶ tool excludes ─▶ language allow-list ─▶ FilesTarget
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use filescope::collector::FileCollector;
//! use filescope::config::{ConfigSource, local};
//! use filescope::permissions::TracingSink;
//! use filescope::tools::ToolRegistry;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let root = Path::new(".");
//! let local = local::load(root, &[".filescope.yaml"]);
//! let remote = ConfigSource::Absent;
//!
//! let collector = FileCollector::default();
//! let target = collector.list(root, &local, &remote, &mut TracingSink)?;
//!
//! let registry = ToolRegistry::builtin();
//! let eslint = registry.get("eslint")?;
//! let eslint_files = collector.filter(eslint, target, &local, &remote)?;
//! let has_config = FileCollector::has_configuration_files(eslint, &eslint_files);
//! # Ok(())
//! # }
//! ```

use crate::config::{ConfigSource, LocalConfiguration, RemoteConfiguration};
use crate::error::Result;
use crate::files::{FilesTarget, walker};
use crate::permissions::{self, DiagnosticSink};
use crate::pipeline;
use crate::tools::Tool;
use std::path::Path;

/// Lists and filters the files under an analysis root
#[derive(Debug, Clone)]
pub struct FileCollector {
    vcs_directory: String,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new(walker::VCS_DIRECTORY)
    }
}

impl FileCollector {
    pub fn new(vcs_directory: impl Into<String>) -> Self {
        Self {
            vcs_directory: vcs_directory.into(),
        }
    }

    /// Enumerate, exclude and permission-check the files under `root`
    ///
    /// Fails if the root cannot be traversed or a configured pattern is
    /// malformed. Unreadable files are not failures: they are reported to
    /// `diagnostics` and returned in `unreadable_files`.
    pub fn list(
        &self,
        root: &Path,
        local: &ConfigSource<LocalConfiguration>,
        remote: &ConfigSource<RemoteConfiguration>,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<FilesTarget> {
        tracing::debug!(
            "Listing {} (local configuration {}, remote configuration {})",
            root.display(),
            local.status(),
            remote.status()
        );

        let files = walker::list_files(root, &self.vcs_directory)?;
        let files = pipeline::exclude(files, local, remote)?;
        let checked = permissions::check(root, files, diagnostics);

        Ok(FilesTarget::new(root, checked))
    }

    /// Narrow `target` to the readable files `tool` should analyze
    pub fn filter(
        &self,
        tool: &Tool,
        target: FilesTarget,
        local: &ConfigSource<LocalConfiguration>,
        remote: &ConfigSource<RemoteConfiguration>,
    ) -> Result<FilesTarget> {
        pipeline::filter_for_tool(tool, target, local, remote)
    }

    /// Whether the readable files already include one of the tool's config files
    ///
    /// Compares the last path segments, so `web/.eslintrc.json` counts for
    /// `.eslintrc.json` but `my.eslintrc.json` does not.
    pub fn has_configuration_files(tool: &Tool, target: &FilesTarget) -> bool {
        target.readable_files.iter().any(|path| {
            tool.config_filenames.iter().any(|name| {
                path == name.as_str() || path.ends_with(&format!("/{}", name))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::{CheckedFiles, FileSet};
    use crate::languages::Language;

    fn target(readable: &[&str], unreadable: &[&str]) -> FilesTarget {
        FilesTarget::new(
            "/repo",
            CheckedFiles {
                readable_files: readable.iter().collect::<FileSet>(),
                unreadable_files: unreadable.iter().collect::<FileSet>(),
            },
        )
    }

    #[test]
    fn test_has_configuration_files_by_basename() {
        let eslint = Tool::new("eslint", [Language::Javascript], [".eslintrc.json"]);

        assert!(FileCollector::has_configuration_files(
            &eslint,
            &target(&[".eslintrc.json", "src/a.js"], &[])
        ));
        assert!(FileCollector::has_configuration_files(
            &eslint,
            &target(&["web/.eslintrc.json"], &[])
        ));
        assert!(!FileCollector::has_configuration_files(
            &eslint,
            &target(&["web/my.eslintrc.json"], &[])
        ));
    }

    #[test]
    fn test_unreadable_configuration_does_not_count() {
        let eslint = Tool::new("eslint", [Language::Javascript], [".eslintrc.json"]);

        assert!(!FileCollector::has_configuration_files(
            &eslint,
            &target(&["src/a.js"], &[".eslintrc.json"])
        ));
    }

    #[test]
    fn test_tool_without_config_names() {
        let tool = Tool::new("bare", [Language::Go], Vec::<String>::new());
        assert!(!FileCollector::has_configuration_files(&tool, &target(&["main.go"], &[])));
    }
}

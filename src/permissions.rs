//! Permission checks for enumerated files
//!
//! Analysis tools may run as a different user than the one enumerating files,
//! so a file only counts as readable when it grants read permission to
//! everyone. Files failing the check are reported through a [`DiagnosticSink`]
//! and collected separately; the run is never aborted.

use crate::files::{CheckedFiles, FileSet};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Why a file was classified as unreadable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum UnreadableReason {
    Missing,
    NotRegularFile,
    NotWorldReadable,
    Inaccessible(String),
}

impl fmt::Display for UnreadableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreadableReason::Missing => f.write_str("file does not exist"),
            UnreadableReason::NotRegularFile => f.write_str("not a regular file"),
            UnreadableReason::NotWorldReadable => f.write_str("not world-readable"),
            UnreadableReason::Inaccessible(error) => write!(f, "cannot read metadata: {}", error),
        }
    }
}

/// A file excluded by the permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: String,
    pub reason: UnreadableReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Receives one diagnostic per unreadable file
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            "Skipping {}: {} (analysis tools may not be able to read it)",
            diagnostic.path,
            diagnostic.reason
        );
    }
}

/// Partition `files` into readable and unreadable sets
pub fn check(root: &Path, files: FileSet, sink: &mut dyn DiagnosticSink) -> CheckedFiles {
    let mut checked = CheckedFiles::default();

    for path in files {
        match classify(&root.join(&path)) {
            None => {
                checked.readable_files.insert(&path);
            }
            Some(reason) => {
                checked.unreadable_files.insert(&path);
                sink.report(Diagnostic { path, reason });
            }
        }
    }

    tracing::debug!(
        "Permission check: {} readable, {} unreadable",
        checked.readable_files.len(),
        checked.unreadable_files.len()
    );
    checked
}

/// `None` when readable, otherwise the reason it is not
fn classify(path: &Path) -> Option<UnreadableReason> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Some(UnreadableReason::Missing);
        }
        Err(e) => return Some(UnreadableReason::Inaccessible(e.to_string())),
    };

    if !metadata.is_file() {
        return Some(UnreadableReason::NotRegularFile);
    }

    if is_world_readable(&metadata) {
        None
    } else {
        Some(UnreadableReason::NotWorldReadable)
    }
}

#[cfg(unix)]
fn is_world_readable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o004 != 0
}

// No "other" permission class outside unix; existing regular files pass.
#[cfg(not(unix))]
fn is_world_readable(_metadata: &std::fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_partitions_by_world_read_bit() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("open.rs"), "").unwrap();
        fs::write(temp_dir.path().join("private.rs"), "").unwrap();
        set_mode(&temp_dir.path().join("open.rs"), 0o644);
        set_mode(&temp_dir.path().join("private.rs"), 0o640);

        let files: FileSet = ["open.rs", "private.rs"].into_iter().collect();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let checked = check(temp_dir.path(), files, &mut diagnostics);

        assert_eq!(checked.readable_files.iter().collect::<Vec<_>>(), vec!["open.rs"]);
        assert_eq!(checked.unreadable_files.iter().collect::<Vec<_>>(), vec!["private.rs"]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic {
                path: "private.rs".to_string(),
                reason: UnreadableReason::NotWorldReadable,
            }]
        );
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let files: FileSet = ["gone.rs"].into_iter().collect();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        let checked = check(temp_dir.path(), files, &mut diagnostics);

        assert!(checked.readable_files.is_empty());
        assert!(checked.unreadable_files.contains("gone.rs"));
        assert_eq!(diagnostics[0].reason, UnreadableReason::Missing);
    }

    #[test]
    fn test_directory_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("dir")).unwrap();
        let files: FileSet = ["dir"].into_iter().collect();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        let checked = check(temp_dir.path(), files, &mut diagnostics);

        assert!(checked.unreadable_files.contains("dir"));
        assert_eq!(diagnostics[0].reason, UnreadableReason::NotRegularFile);
    }

    #[test]
    fn test_tracing_sink_accepts_diagnostics() {
        let temp_dir = TempDir::new().unwrap();
        let files: FileSet = ["gone.rs"].into_iter().collect();

        let checked = check(temp_dir.path(), files, &mut TracingSink);
        assert_eq!(checked.unreadable_files.len(), 1);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic {
            path: "README.md".to_string(),
            reason: UnreadableReason::NotWorldReadable,
        };
        assert_eq!(diagnostic.to_string(), "README.md: not world-readable");
    }
}

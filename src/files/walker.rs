use crate::error::{FilesError, Result};
use crate::files::FileSet;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Component, Path};

/// Version control metadata directory skipped at the root
pub const VCS_DIRECTORY: &str = ".git";

/// Directory enumerator - lists every regular file under a root
///
/// Responsibilities:
/// - Recursive traversal without any gitignore or hidden-file filtering
/// - Skipping the version control directory at the top level
/// - Excluding symlinks, directories and special files
/// - Normalizing results to root-relative `/`-separated paths
///
/// Enumeration is all-or-nothing: the first traversal error aborts the walk
/// and no partial set is returned.
pub fn list_files(root: &Path, vcs_directory: &str) -> Result<FileSet> {
    let metadata = std::fs::metadata(root).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FilesError::RootNotFound(root.to_path_buf()),
        _ => FilesError::Io {
            path: root.to_path_buf(),
            source,
        },
    })?;
    if !metadata.is_dir() {
        return Err(FilesError::RootNotDirectory(root.to_path_buf()));
    }

    let mut files = FileSet::new();
    for entry in build_walker(root, vcs_directory) {
        let entry = entry.map_err(|source| FilesError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        // Symlinks are never followed, so they report their own file type here
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if let Some(relative) = relative_path(root, entry.path()) {
            files.insert(relative);
        }
    }

    tracing::debug!("Enumerated {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Build a walker with every standard filter disabled
fn build_walker(root: &Path, vcs_directory: &str) -> ignore::Walk {
    let vcs_directory = vcs_directory.to_string();
    let mut builder = WalkBuilder::new(root);

    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            !(entry.depth() == 1 && entry.file_name() == OsStr::new(&vcs_directory))
        });

    builder.build()
}

/// Root-relative path joined with `/`, or `None` for the root itself and for
/// names that are not valid UTF-8
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut segments = Vec::new();

    for component in relative.components() {
        if let Component::Normal(segment) = component {
            let Some(segment) = segment.to_str() else {
                tracing::warn!(
                    "Skipping {}: file name is not valid UTF-8",
                    path.display()
                );
                return None;
            };
            segments.push(segment);
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "content").unwrap();
    }

    #[test]
    fn test_lists_nested_files_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "src/Main.scala");
        touch(temp_dir.path(), "src/deep/nested/Util.scala");
        touch(temp_dir.path(), "README.md");

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert_eq!(
            files.iter().collect::<Vec<_>>(),
            vec!["README.md", "src/Main.scala", "src/deep/nested/Util.scala"]
        );
    }

    #[test]
    fn test_skips_vcs_directory_only_at_root() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), ".git/config");
        touch(temp_dir.path(), ".git/objects/ab/cdef");
        touch(temp_dir.path(), "vendor/.git/config");
        touch(temp_dir.path(), ".gitignore");

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert!(!files.contains(".git/config"));
        assert!(!files.contains(".git/objects/ab/cdef"));
        assert!(files.contains("vendor/.git/config"));
        assert!(files.contains(".gitignore"));
    }

    #[test]
    fn test_does_not_apply_gitignore_rules() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), ".gitignore");
        fs::write(temp_dir.path().join(".gitignore"), "target/\n").unwrap();
        touch(temp_dir.path(), "target/out.class");
        touch(temp_dir.path(), ".hidden/file.txt");

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert!(files.contains("target/out.class"));
        assert!(files.contains(".hidden/file.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_excludes_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "real.txt");
        std::os::unix::fs::symlink(
            temp_dir.path().join("real.txt"),
            temp_dir.path().join("link.txt"),
        )
        .unwrap();

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert!(files.contains("real.txt"));
        assert!(!files.contains("link.txt"));
    }

    #[test]
    fn test_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let result = list_files(&missing, VCS_DIRECTORY);
        assert!(matches!(result, Err(FilesError::RootNotFound(_))));
    }

    #[test]
    fn test_file_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "file.txt");

        let result = list_files(&temp_dir.path().join("file.txt"), VCS_DIRECTORY);
        assert!(matches!(result, Err(FilesError::RootNotDirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_stays_in_file_name() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a\\b.rs");

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert!(files.contains("a\\b.rs"));
        assert!(!files.contains("a/b.rs"));
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "ok.rs");
        let name = std::ffi::OsStr::from_bytes(b"bad\xff.rs");
        if fs::write(temp_dir.path().join(name), "content").is_err() {
            // Filesystem refuses non-UTF-8 names
            return;
        }

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert_eq!(files.iter().collect::<Vec<_>>(), vec!["ok.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_excludes_sockets() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "main.rs");
        let _listener =
            std::os::unix::net::UnixListener::bind(temp_dir.path().join("daemon.sock")).unwrap();

        let files = list_files(temp_dir.path(), VCS_DIRECTORY).unwrap();

        assert!(temp_dir.path().join("daemon.sock").exists());
        assert!(!files.contains("daemon.sock"));
        assert!(files.contains("main.rs"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_fails_whole_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "main.rs");
        touch(temp_dir.path(), "locked/inner.rs");
        let locked = temp_dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read the directory anyway
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = list_files(temp_dir.path(), VCS_DIRECTORY);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(
            result,
            Err(FilesError::Walk { .. }) | Err(FilesError::Io { .. })
        ));
    }
}

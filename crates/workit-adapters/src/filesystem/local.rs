//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;
use workit_core::{application::ports::Filesystem, error::WorkitResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> WorkitResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn list_files(&self, root: &Path) -> WorkitResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                let err = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                map_io_error(&path, err, "walk directory")
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        trace!(root = %root.display(), count = files.len(), "Listed files");
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> WorkitResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WorkitResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> workit_core::error::WorkitError {
    use workit_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_is_recursive_sorted_and_skips_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("cmd/service1")).unwrap();
        std::fs::create_dir_all(root.join("internal")).unwrap();
        std::fs::write(root.join("go.mod"), "module x\n").unwrap();
        std::fs::write(root.join("cmd/service1/main.go"), "package main\n").unwrap();
        std::fs::write(root.join("internal/a.go"), "package internal\n").unwrap();

        let files = LocalFilesystem::new().list_files(root).unwrap();

        assert_eq!(
            files,
            vec![
                root.join("cmd/service1/main.go"),
                root.join("go.mod"),
                root.join("internal/a.go"),
            ]
        );
    }

    #[test]
    fn read_missing_file_is_a_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&tmp.path().join("nope.go"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn write_replaces_content_in_place() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("main.go");
        std::fs::write(&file, "old").unwrap();

        let fs = LocalFilesystem::new();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(fs.read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn remove_dir_all_removes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(".git/objects");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("pack"), "x").unwrap();

        let fs = LocalFilesystem::new();
        fs.remove_dir_all(&tmp.path().join(".git")).unwrap();
        assert!(!fs.exists(&tmp.path().join(".git")));
    }
}

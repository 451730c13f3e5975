//! Test doubles shared by the service tests.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressObserver, ScaffoldEvent},
    },
    error::WorkitResult,
};

/// Map-backed filesystem with injectable failures and operation counters.
#[derive(Debug, Clone, Default)]
pub struct FakeFilesystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    fail_remove: HashSet<PathBuf>,
    fail_read: HashSet<PathBuf>,
    fail_write: HashSet<PathBuf>,
    removals: usize,
    writes: Vec<PathBuf>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .files
            .insert(path.into(), content.into());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().directories.insert(path.into());
        self
    }

    pub fn fail_remove(self, path: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().fail_remove.insert(path.into());
        self
    }

    pub fn fail_read(self, path: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().fail_read.insert(path.into());
        self
    }

    pub fn fail_write(self, path: impl Into<PathBuf>) -> Self {
        self.inner.lock().unwrap().fail_write.insert(path.into());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    pub fn removals(&self) -> usize {
        self.inner.lock().unwrap().removals
    }

    pub fn writes(&self) -> usize {
        self.inner.lock().unwrap().writes.len()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.inner.lock().unwrap().writes.clone()
    }
}

fn failure(path: &Path, reason: &str) -> crate::error::WorkitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Filesystem for FakeFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.directories.iter().any(|d| d.starts_with(path))
            || inner.files.keys().any(|f| f.starts_with(path))
    }

    fn remove_dir_all(&self, path: &Path) -> WorkitResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_remove.contains(path) {
            return Err(failure(path, "permission denied"));
        }
        inner.removals += 1;
        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn list_files(&self, root: &Path) -> WorkitResult<Vec<PathBuf>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .files
            .keys()
            .filter(|f| f.starts_with(root))
            .cloned()
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> WorkitResult<String> {
        let inner = self.inner.lock().unwrap();
        if inner.fail_read.contains(path) {
            return Err(failure(path, "permission denied"));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| failure(path, "no such file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WorkitResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_write.contains(path) {
            return Err(failure(path, "permission denied"));
        }
        inner.files.insert(path.to_path_buf(), content.to_owned());
        inner.writes.push(path.to_path_buf());
        Ok(())
    }
}

/// Observer that records events as short strings.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn notify(&self, event: ScaffoldEvent<'_>) {
        let line = match event {
            ScaffoldEvent::FetchStarted { source, reference } => {
                format!("fetch-started {source} {reference}")
            }
            ScaffoldEvent::Fetched { path } => format!("fetched {}", path.display()),
            ScaffoldEvent::MetadataPurged { path } => format!("purged {}", path.display()),
            ScaffoldEvent::ModuleDeclared { identity } => format!("declared {identity}"),
            ScaffoldEvent::FileRewritten { path, occurrences } => {
                format!("rewritten {} x{occurrences}", path.display())
            }
            ScaffoldEvent::ResolvingDependencies { root } => {
                format!("resolving {}", root.display())
            }
        };
        self.events.borrow_mut().push(line);
    }
}

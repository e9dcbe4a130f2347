//! In-memory template reader, used for stdin templates and in tests.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use placard_core::{
    application::{ApplicationError, ports::TemplateReader},
    error::PlacardResult,
};

/// In-memory file map. Clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for tests.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        // Poisoned lock: insert is dropped.
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
        self
    }

    /// Insert or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> PlacardResult<()> {
        let mut files = self
            .files
            .write()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "memory filesystem" })?;
        files.insert(path.into(), content.into());
        Ok(())
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl TemplateReader for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> PlacardResult<String> {
        let files = self
            .files
            .read()
            .map_err(|_| ApplicationError::LockPoisoned { resource: "memory filesystem" })?;

        files.get(path).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}

//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use placard_core::{
    application::{ApplicationError, ports::TemplateReader},
    error::{PlacardError, PlacardResult},
};

/// Production template reader using `std::fs`.
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

impl TemplateReader for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> PlacardResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn map_io_error(path: &Path, e: io::Error) -> PlacardError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::TemplateRead {
            path: path.to_path_buf(),
            reason: format!("Failed to read file: {}", e),
        },
    }
    .into()
}

//! # Local Filesystem Backend

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};

/// One JSON file per document under a data directory
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DocumentBackend for LocalBackend {
    fn read(&self, name: &str) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.full_path(name)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(name, e)),
        }
    }

    /// Writes go to a sibling temp file renamed over the target, so readers
    /// never observe a half-written document.
    fn write(&self, name: &str, data: &[u8]) -> StoreResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::io(name, e))?;

        let target = self.full_path(name);
        let staging = self.full_path(&format!("{}.tmp", name));

        fs::write(&staging, data).map_err(|e| StoreError::io(name, e))?;
        fs::rename(&staging, &target).map_err(|e| StoreError::io(name, e))
    }
}

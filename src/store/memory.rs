//! # In-Memory Backend
//!
//! Keeps documents in a map. Used by tests and throwaway instances.

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBackend for MemoryBackend {
    fn read(&self, name: &str) -> StoreResult<Option<Vec<u8>>> {
        let documents = self.documents.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(documents.get(name).cloned())
    }

    fn write(&self, name: &str, data: &[u8]) -> StoreResult<()> {
        let mut documents = self.documents.write().map_err(|_| StoreError::LockPoisoned)?;
        documents.insert(name.to_string(), data.to_vec());
        Ok(())
    }
}

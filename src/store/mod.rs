//! # Document Store
//!
//! Every collection is an independent JSON document read and written whole.
//! [`Store`] gives typed get/put per collection over any
//! [`DocumentBackend`], so the backing medium can change without touching
//! callers.
//!
//! ## Repair
//! Absent or blank documents, invalid JSON, and a wrong top-level container
//! load as the collection's empty default, which is written back
//! immediately. Inside a readable document, bad records are skipped or
//! defaulted one at a time.
//!
//! ## Writers
//! Read-modify-write sequences hold [`Store::lock`]. This serializes writers
//! inside one process only; separate processes sharing a data directory
//! still overwrite each other.

pub mod backend;
pub mod collection;
pub mod errors;
pub mod local;
pub mod memory;

pub use backend::DocumentBackend;
pub use collection::{Artists, Collection, GrandFinal, GrandVotes, SemiVotes, Users};
pub use errors::{StoreError, StoreResult};
pub use local::LocalBackend;
pub use memory::MemoryBackend;

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::model::{VoteBook, VoteContext};

/// Typed access to the contest documents
#[derive(Debug)]
pub struct Store {
    backend: Box<dyn DocumentBackend>,
    write_lock: Mutex<()>,
}

impl Store {
    pub fn new(backend: impl DocumentBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            write_lock: Mutex::new(()),
        }
    }

    /// Store over a fresh [`MemoryBackend`]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Load a collection, repairing it if necessary
    pub fn get<C: Collection>(&self) -> StoreResult<C::Doc> {
        let bytes = match self.backend.read(C::DOCUMENT)? {
            Some(bytes) if !is_blank(&bytes) => bytes,
            _ => {
                debug!(document = C::DOCUMENT, "document missing, writing default");
                return self.reset::<C>();
            }
        };

        match C::decode(&bytes) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(
                    document = C::DOCUMENT,
                    error = %e,
                    "document unreadable, resetting to default"
                );
                self.reset::<C>()
            }
        }
    }

    /// Replace a collection
    pub fn put<C: Collection>(&self, doc: &C::Doc) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(doc).map_err(|e| StoreError::Encode {
            document: C::DOCUMENT.to_string(),
            message: e.to_string(),
        })?;
        self.backend.write(C::DOCUMENT, &bytes)
    }

    /// Load the vote book for a context
    pub fn votes(&self, context: VoteContext) -> StoreResult<VoteBook> {
        match context {
            VoteContext::Semi => self.get::<SemiVotes>(),
            VoteContext::Grand => self.get::<GrandVotes>(),
        }
    }

    /// Replace the vote book for a context
    pub fn put_votes(&self, context: VoteContext, book: &VoteBook) -> StoreResult<()> {
        match context {
            VoteContext::Semi => self.put::<SemiVotes>(book),
            VoteContext::Grand => self.put::<GrandVotes>(book),
        }
    }

    /// Exclusive access for a read-modify-write sequence
    pub fn lock(&self) -> StoreResult<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Load every collection once so missing documents are created
    pub fn ensure_documents(&self) -> StoreResult<()> {
        self.get::<Artists>()?;
        self.get::<Users>()?;
        self.get::<SemiVotes>()?;
        self.get::<GrandVotes>()?;
        self.get::<GrandFinal>()?;
        Ok(())
    }

    fn reset<C: Collection>(&self) -> StoreResult<C::Doc> {
        let doc = C::Doc::default();
        self.put::<C>(&doc)?;
        Ok(doc)
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

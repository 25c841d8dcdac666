//! # Document Backend Trait

use super::errors::StoreResult;

/// Raw byte storage for named documents.
///
/// Implementations only move bytes; decoding and repair happen in
/// [`Store`](super::Store).
pub trait DocumentBackend: Send + Sync + std::fmt::Debug {
    /// Read a whole document, `None` if it does not exist
    fn read(&self, name: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace a whole document
    fn write(&self, name: &str, data: &[u8]) -> StoreResult<()>;
}

//! # Contest Errors

use thiserror::Error;

use crate::model::ArtistId;
use crate::store::StoreError;

/// Result type for contest operations
pub type ContestResult<T> = Result<T, ContestError>;

/// Voting, listing and curation errors
#[derive(Debug, Clone, Error)]
pub enum ContestError {
    /// Required request field absent or unusable
    #[error("{0} required")]
    MissingField(&'static str),

    #[error("Artist not found: {0}")]
    ArtistNotFound(ArtistId),

    /// Artist exists but is not in the official final line-up
    #[error("Artist {0} is not in the final")]
    NotInFinal(ArtistId),

    #[error("for admin only")]
    AdminRequired,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ContestError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ContestError::MissingField(_) => 400,
            ContestError::AdminRequired => 403,
            ContestError::ArtistNotFound(_) => 404,
            ContestError::NotInFinal(_) => 404,
            ContestError::Storage(e) => e.status_code(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

//! Typed error enum for the service layer.

use pms_suggest_core::CoreError;
use pms_suggest_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (I/O, pool, migration, unavailable store).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Refresh payload could not be parsed.
    #[error("payload: {0}")]
    Core(#[from] CoreError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether the store could not be opened for this process.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_fatal_open())
    }
}

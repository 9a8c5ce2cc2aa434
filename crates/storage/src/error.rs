//! Typed error enum for the storage layer.
//!
//! Not-found is never an error here: point lookups return `Ok(None)`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / file failure reported by `SQLite`.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No connection could be obtained from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A schema step failed; the stored version is left unchanged.
    #[error("migration error: {0}")]
    Migration(String),

    /// The shared store failed to open earlier in this process.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking storage task panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(String),
}

impl StorageError {
    /// Whether the failure happened while opening or migrating the store.
    pub fn is_fatal_open(&self) -> bool {
        matches!(self, Self::Migration(_) | Self::Unavailable(_))
    }
}

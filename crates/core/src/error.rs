use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by core helpers (payload parsing).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, CoreError>;

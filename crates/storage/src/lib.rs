//! Storage layer for pms-suggest
//!
//! `SQLite`-backed local suggestion cache: customers keyed by mobile number
//! plus two self-keyed vocabularies (descriptions, remarks).

mod error;
mod migrations;
mod shared;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use shared::{SharedStore, global};
pub use storage::Storage;
pub use traits::SuggestionStore;

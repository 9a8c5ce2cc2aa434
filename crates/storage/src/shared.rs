//! Process-wide, lazily opened store handle.
//!
//! The first `get()` opens and migrates the store; every concurrent and later
//! caller awaits that same initialization instead of opening its own
//! connection. The outcome is memoized, including failure: once the open has
//! failed the store stays unavailable until the process restarts.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use pms_suggest_core::{CollectionCounts, Customer, ExportSnapshot, SuggestConfig};

use crate::sqlite_async::blocking;
use crate::traits::SuggestionStore;
use crate::{Storage, StorageError};

static GLOBAL_STORE: OnceLock<Arc<SharedStore>> = OnceLock::new();

/// The process-wide store, configured from the environment on first use.
pub fn global() -> Arc<SharedStore> {
    Arc::clone(
        GLOBAL_STORE.get_or_init(|| Arc::new(SharedStore::from_config(&SuggestConfig::from_env()))),
    )
}

#[derive(Debug)]
pub struct SharedStore {
    db_path: PathBuf,
    pool_size: u32,
    cell: Arc<OnceLock<Result<Storage, String>>>,
}

impl SharedStore {
    #[must_use]
    pub fn new(db_path: impl Into<PathBuf>, pool_size: u32) -> Self {
        Self { db_path: db_path.into(), pool_size, cell: Arc::new(OnceLock::new()) }
    }

    #[must_use]
    pub fn from_config(config: &SuggestConfig) -> Self {
        Self::new(config.db_path.clone(), config.pool_size)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Whether an open attempt has completed (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The open store, opening and migrating it on first call.
    ///
    /// The open runs on the blocking pool and finishes even if the calling
    /// future is dropped; later callers wait for that same attempt.
    pub async fn get(&self) -> Result<&Storage, StorageError> {
        if self.cell.get().is_none() {
            let cell = Arc::clone(&self.cell);
            let db_path = self.db_path.clone();
            let pool_size = self.pool_size;
            blocking(move || {
                cell.get_or_init(|| open_store(&db_path, pool_size));
                Ok(())
            })
            .await?;
        }
        match self.cell.get() {
            Some(Ok(storage)) => Ok(storage),
            Some(Err(reason)) => Err(StorageError::Unavailable(reason.clone())),
            None => Err(StorageError::Unavailable("store open did not complete".to_owned())),
        }
    }
}

fn open_store(db_path: &Path, pool_size: u32) -> Result<Storage, String> {
    let opened = db_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or(Ok(()), std::fs::create_dir_all)
        .map_err(StorageError::from)
        .and_then(|()| Storage::open(db_path, pool_size));
    opened.map_err(|e| {
        tracing::error!(path = %db_path.display(), error = %e, "failed to open suggestion store");
        e.to_string()
    })
}

#[async_trait]
impl SuggestionStore for SharedStore {
    async fn upsert_customer(
        &self,
        customer_name: &str,
        mobile_no: &str,
    ) -> Result<(), StorageError> {
        SuggestionStore::upsert_customer(self.get().await?, customer_name, mobile_no).await
    }
    async fn get_customer_by_mobile(
        &self,
        mobile_no: &str,
    ) -> Result<Option<Customer>, StorageError> {
        SuggestionStore::get_customer_by_mobile(self.get().await?, mobile_no).await
    }
    async fn get_all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        SuggestionStore::get_all_customers(self.get().await?).await
    }
    async fn search_mobile_nos(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        SuggestionStore::search_mobile_nos(self.get().await?, partial).await
    }
    async fn search_customer_names(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        SuggestionStore::search_customer_names(self.get().await?, partial).await
    }
    async fn add_description(&self, description: &str) -> Result<(), StorageError> {
        SuggestionStore::add_description(self.get().await?, description).await
    }
    async fn get_all_descriptions(&self) -> Result<Vec<String>, StorageError> {
        SuggestionStore::get_all_descriptions(self.get().await?).await
    }
    async fn search_descriptions(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        SuggestionStore::search_descriptions(self.get().await?, partial).await
    }
    async fn add_remark(&self, remark: &str) -> Result<(), StorageError> {
        SuggestionStore::add_remark(self.get().await?, remark).await
    }
    async fn get_all_remarks(&self) -> Result<Vec<String>, StorageError> {
        SuggestionStore::get_all_remarks(self.get().await?).await
    }
    async fn search_remarks(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        SuggestionStore::search_remarks(self.get().await?, partial).await
    }
    async fn export_all(&self) -> Result<ExportSnapshot, StorageError> {
        SuggestionStore::export_all(self.get().await?).await
    }
    async fn collection_counts(&self) -> Result<CollectionCounts, StorageError> {
        SuggestionStore::collection_counts(self.get().await?).await
    }
    async fn schema_version(&self) -> Result<i32, StorageError> {
        SuggestionStore::schema_version(self.get().await?).await
    }
}

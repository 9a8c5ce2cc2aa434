//! Async trait implementation for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use pms_suggest_core::{CollectionCounts, Customer, ExportSnapshot};

use crate::traits::SuggestionStore;
use crate::{Storage, StorageError};

/// Helper: run a blocking closure on the tokio blocking pool.
pub(crate) async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Task(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@pass str $arg:ident) => { &$arg };
}

#[async_trait]
impl SuggestionStore for Storage {
    async fn upsert_customer(
        &self,
        customer_name: &str,
        mobile_no: &str,
    ) -> Result<(), StorageError> {
        delegate!(self, upsert_customer, @str customer_name, @str mobile_no)
    }
    async fn get_customer_by_mobile(
        &self,
        mobile_no: &str,
    ) -> Result<Option<Customer>, StorageError> {
        delegate!(self, get_customer_by_mobile, @str mobile_no)
    }
    async fn get_all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        delegate!(self, get_all_customers)
    }
    async fn search_mobile_nos(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        delegate!(self, search_mobile_nos, @str partial)
    }
    async fn search_customer_names(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        delegate!(self, search_customer_names, @str partial)
    }
    async fn add_description(&self, description: &str) -> Result<(), StorageError> {
        delegate!(self, add_description, @str description)
    }
    async fn get_all_descriptions(&self) -> Result<Vec<String>, StorageError> {
        delegate!(self, get_all_descriptions)
    }
    async fn search_descriptions(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        delegate!(self, search_descriptions, @str partial)
    }
    async fn add_remark(&self, remark: &str) -> Result<(), StorageError> {
        delegate!(self, add_remark, @str remark)
    }
    async fn get_all_remarks(&self) -> Result<Vec<String>, StorageError> {
        delegate!(self, get_all_remarks)
    }
    async fn search_remarks(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        delegate!(self, search_remarks, @str partial)
    }
    async fn export_all(&self) -> Result<ExportSnapshot, StorageError> {
        delegate!(self, export_all)
    }
    async fn collection_counts(&self) -> Result<CollectionCounts, StorageError> {
        delegate!(self, collection_counts)
    }
    async fn schema_version(&self) -> Result<i32, StorageError> {
        delegate!(self, schema_version)
    }
}

//! Async store abstraction consumed by the service layer.

use async_trait::async_trait;
use pms_suggest_core::{CollectionCounts, Customer, ExportSnapshot};

use crate::StorageError;

/// Local suggestion store: customers plus description/remark vocabularies.
///
/// Calls may run concurrently; each write is atomic on its own and nothing
/// groups several writes together.
#[async_trait]
pub trait SuggestionStore: Send + Sync {
    /// Insert or overwrite the customer keyed by `mobile_no`.
    async fn upsert_customer(
        &self,
        customer_name: &str,
        mobile_no: &str,
    ) -> Result<(), StorageError>;

    /// Exact lookup; `Ok(None)` when absent.
    async fn get_customer_by_mobile(
        &self,
        mobile_no: &str,
    ) -> Result<Option<Customer>, StorageError>;

    async fn get_all_customers(&self) -> Result<Vec<Customer>, StorageError>;

    /// Prefix match on mobile numbers, case-sensitive.
    async fn search_mobile_nos(&self, partial: &str) -> Result<Vec<String>, StorageError>;

    /// Substring match on names, case-insensitive.
    async fn search_customer_names(&self, partial: &str) -> Result<Vec<String>, StorageError>;

    async fn add_description(&self, description: &str) -> Result<(), StorageError>;

    async fn get_all_descriptions(&self) -> Result<Vec<String>, StorageError>;

    /// Prefix match, case-insensitive.
    async fn search_descriptions(&self, partial: &str) -> Result<Vec<String>, StorageError>;

    async fn add_remark(&self, remark: &str) -> Result<(), StorageError>;

    async fn get_all_remarks(&self) -> Result<Vec<String>, StorageError>;

    /// Prefix match, case-insensitive.
    async fn search_remarks(&self, partial: &str) -> Result<Vec<String>, StorageError>;

    async fn export_all(&self) -> Result<ExportSnapshot, StorageError>;

    async fn collection_counts(&self) -> Result<CollectionCounts, StorageError>;

    async fn schema_version(&self) -> Result<i32, StorageError>;
}

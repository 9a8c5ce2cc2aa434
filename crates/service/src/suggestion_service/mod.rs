mod autocomplete;
mod export;
mod submission;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use pms_suggest_core::{CollectionCounts, Customer, SuggestConfig};
use pms_suggest_storage::SuggestionStore;
use serde::Serialize;

pub use autocomplete::{SuggestionField, SuggestionPolicy};
pub use export::ExportReport;
pub use submission::{ParcelSubmission, RefreshReport};

use crate::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub schema_version: i32,
    #[serde(flatten)]
    pub counts: CollectionCounts,
}

pub struct SuggestionService {
    pub(crate) store: Arc<dyn SuggestionStore>,
    pub(crate) policy: SuggestionPolicy,
    pub(crate) export_file_name: String,
}

impl SuggestionService {
    #[must_use]
    pub fn new(store: Arc<dyn SuggestionStore>, config: &SuggestConfig) -> Self {
        Self {
            store,
            policy: SuggestionPolicy::from_config(config),
            export_file_name: config.export_file_name.clone(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SuggestionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SuggestionPolicy {
        self.policy
    }

    pub async fn customers(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.store.get_all_customers().await?)
    }

    pub async fn descriptions(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.get_all_descriptions().await?)
    }

    pub async fn remarks(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.store.get_all_remarks().await?)
    }

    pub async fn add_customer(
        &self,
        customer_name: &str,
        mobile_no: &str,
    ) -> Result<(), ServiceError> {
        Ok(self.store.upsert_customer(customer_name, mobile_no).await?)
    }

    pub async fn add_description(&self, description: &str) -> Result<(), ServiceError> {
        Ok(self.store.add_description(description).await?)
    }

    pub async fn add_remark(&self, remark: &str) -> Result<(), ServiceError> {
        Ok(self.store.add_remark(remark).await?)
    }

    pub async fn customer(&self, mobile_no: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(self.store.get_customer_by_mobile(mobile_no).await?)
    }

    pub async fn stats(&self) -> Result<StoreStats, ServiceError> {
        Ok(StoreStats {
            schema_version: self.store.schema_version().await?,
            counts: self.store.collection_counts().await?,
        })
    }
}

//! Write paths: parcel form submission and bulk refresh.

use std::path::Path;

use pms_suggest_core::{Customer, RefreshPayload};
use serde::Serialize;

use super::SuggestionService;
use crate::ServiceError;

/// What a successful parcel submission contributes to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelSubmission {
    pub sender: Customer,
    pub receiver: Customer,
    pub description: String,
    pub remark: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub customers: usize,
    pub descriptions: usize,
    pub remarks: usize,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl SuggestionService {
    /// Remember the sender, receiver, description and remark of a submission.
    ///
    /// The writes are independent: the first failure is returned and the
    /// writes before it stay committed. Blank mobiles and blank
    /// description/remark text are not recorded.
    pub async fn record_submission(
        &self,
        submission: &ParcelSubmission,
    ) -> Result<(), ServiceError> {
        for party in [&submission.sender, &submission.receiver] {
            if is_blank(&party.mobile_no) {
                tracing::debug!("skipping party without mobile number");
                continue;
            }
            self.store.upsert_customer(&party.customer_name, &party.mobile_no).await?;
        }
        if !is_blank(&submission.description) {
            self.store.add_description(&submission.description).await?;
        }
        if !is_blank(&submission.remark) {
            self.store.add_remark(&submission.remark).await?;
        }
        tracing::info!(
            sender = %submission.sender.mobile_no,
            receiver = %submission.receiver.mobile_no,
            "recorded parcel submission"
        );
        Ok(())
    }

    /// Apply a refresh batch element by element.
    ///
    /// Stops at the first failing element; elements already applied stay.
    pub async fn refresh(&self, payload: &RefreshPayload) -> Result<RefreshReport, ServiceError> {
        let mut report = RefreshReport::default();
        for customer in &payload.customers {
            self.store.upsert_customer(&customer.customer_name, &customer.mobile_no).await?;
            report.customers = report.customers.saturating_add(1);
        }
        for description in &payload.descriptions {
            self.store.add_description(description).await?;
            report.descriptions = report.descriptions.saturating_add(1);
        }
        for remark in &payload.remarks {
            self.store.add_remark(remark).await?;
            report.remarks = report.remarks.saturating_add(1);
        }
        tracing::info!(
            customers = report.customers,
            descriptions = report.descriptions,
            remarks = report.remarks,
            "applied refresh batch"
        );
        Ok(report)
    }

    /// Read a JSON [`RefreshPayload`] from `path` and apply it.
    pub async fn refresh_from_file(&self, path: &Path) -> Result<RefreshReport, ServiceError> {
        let json = tokio::fs::read_to_string(path).await?;
        let payload = RefreshPayload::from_json(&json)?;
        self.refresh(&payload).await
    }
}

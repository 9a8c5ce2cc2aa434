use std::path::Path;

use anyhow::Result;
use pms_suggest_service::{ParcelSubmission, SuggestionService};
use serde_json::json;

use super::{print_json, print_status};

pub(crate) async fn add_customer(
    service: &SuggestionService,
    name: &str,
    mobile: &str,
) -> Result<()> {
    service.add_customer(name, mobile).await?;
    print_status("ok", json!({ "mobile_no": mobile }))
}

pub(crate) async fn add_description(service: &SuggestionService, text: &str) -> Result<()> {
    service.add_description(text).await?;
    print_status("ok", json!({ "description": text }))
}

pub(crate) async fn add_remark(service: &SuggestionService, text: &str) -> Result<()> {
    service.add_remark(text).await?;
    print_status("ok", json!({ "remark": text }))
}

pub(crate) async fn submit(service: &SuggestionService, submission: &ParcelSubmission) -> Result<()> {
    service.record_submission(submission).await?;
    print_status("ok", json!({}))
}

pub(crate) async fn refresh(service: &SuggestionService, file: &Path) -> Result<()> {
    let report = service.refresh_from_file(file).await?;
    print_json(&report)
}

use std::path::Path;

use anyhow::Result;
use pms_suggest_service::SuggestionService;

use super::print_status;

pub(crate) async fn run(service: &SuggestionService, out_dir: &Path) -> Result<()> {
    let report = service.export_to_dir(out_dir).await?;
    print_status("ok", serde_json::to_value(&report)?)
}

use std::path::{Path, PathBuf};

use pms_suggest_core::{CollectionCounts, ExportSnapshot};
use serde::Serialize;

use super::SuggestionService;
use crate::ServiceError;

/// Where an export was written and what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub counts: CollectionCounts,
}

fn render(snapshot: &ExportSnapshot) -> Result<String, ServiceError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

impl SuggestionService {
    /// Pretty-printed JSON of every collection.
    pub async fn export_json(&self) -> Result<String, ServiceError> {
        render(&self.store.export_all().await?)
    }

    /// Write the export artifact into `dir`.
    ///
    /// The reported counts describe the snapshot that was written.
    pub async fn export_to_dir(&self, dir: &Path) -> Result<ExportReport, ServiceError> {
        let snapshot = self.store.export_all().await?;
        let json = render(&snapshot)?;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.export_file_name);
        tokio::fs::write(&path, json).await?;
        tracing::info!(path = %path.display(), "wrote suggestion export");
        Ok(ExportReport { path, counts: snapshot.counts() })
    }
}

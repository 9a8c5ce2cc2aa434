use pms_suggest_core::{Collection, CollectionCounts, ExportSnapshot};

use super::{Storage, get_conn};
use crate::StorageError;

impl Storage {
    /// Read every collection in full.
    ///
    /// Each collection is read completely; the three reads are not one
    /// transaction, so a concurrent write may land between them.
    pub fn export_all(&self) -> Result<ExportSnapshot, StorageError> {
        let snapshot = ExportSnapshot {
            customers: self.get_all_customers()?,
            descriptions: self.get_all_descriptions()?,
            remarks: self.get_all_remarks()?,
        };
        let counts = snapshot.counts();
        tracing::info!(
            customers = counts.customers,
            descriptions = counts.descriptions,
            remarks = counts.remarks,
            "exported suggestion store"
        );
        Ok(snapshot)
    }

    pub fn collection_counts(&self) -> Result<CollectionCounts, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count = |collection: Collection| -> Result<usize, StorageError> {
            let sql = format!("SELECT COUNT(*) FROM {collection}");
            let n: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
            Ok(usize::try_from(n).unwrap_or(0))
        };
        Ok(CollectionCounts {
            customers: count(Collection::Customers)?,
            descriptions: count(Collection::Descriptions)?,
            remarks: count(Collection::Remarks)?,
        })
    }
}

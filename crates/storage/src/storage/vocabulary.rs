//! Self-keyed string sets: each stored value is its own key.

use pms_suggest_core::{Collection, DESCRIPTION_MATCH, MatchPolicy, REMARK_MATCH};
use rusqlite::params;

use super::{Storage, get_conn};
use crate::StorageError;

impl Storage {
    fn add_term(&self, collection: Collection, value: &str) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        // value is the key, so an existing row is already identical
        let inserted = conn.execute(
            &format!("INSERT OR IGNORE INTO {collection} (value) VALUES (?1)"),
            params![value],
        )?;
        tracing::debug!(%collection, inserted, "term added");
        Ok(())
    }

    fn all_terms(&self, collection: Collection) -> Result<Vec<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("SELECT value FROM {collection} ORDER BY rowid"))?;
        let terms = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;
        Ok(terms)
    }

    fn search_terms(
        &self,
        collection: Collection,
        policy: MatchPolicy,
        partial: &str,
    ) -> Result<Vec<String>, StorageError> {
        let terms = self.all_terms(collection)?;
        Ok(policy.filter(terms, partial, String::as_str))
    }

    pub fn add_description(&self, description: &str) -> Result<(), StorageError> {
        self.add_term(Collection::Descriptions, description)
    }

    pub fn get_all_descriptions(&self) -> Result<Vec<String>, StorageError> {
        self.all_terms(Collection::Descriptions)
    }

    /// Descriptions starting with `partial`, ignoring case.
    pub fn search_descriptions(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        self.search_terms(Collection::Descriptions, DESCRIPTION_MATCH, partial)
    }

    pub fn add_remark(&self, remark: &str) -> Result<(), StorageError> {
        self.add_term(Collection::Remarks, remark)
    }

    pub fn get_all_remarks(&self) -> Result<Vec<String>, StorageError> {
        self.all_terms(Collection::Remarks)
    }

    /// Remarks starting with `partial`, ignoring case.
    pub fn search_remarks(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        self.search_terms(Collection::Remarks, REMARK_MATCH, partial)
    }
}

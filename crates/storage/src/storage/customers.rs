use pms_suggest_core::{Customer, MOBILE_MATCH, NAME_MATCH};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn};
use crate::StorageError;

fn map_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer { mobile_no: row.get(0)?, customer_name: row.get(1)? })
}

impl Storage {
    /// Insert or overwrite the customer keyed by `mobile_no` (last write wins).
    ///
    /// An overwritten customer keeps its position in full scans.
    pub fn upsert_customer(
        &self,
        customer_name: &str,
        mobile_no: &str,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO customers (mobile_no, customer_name) VALUES (?1, ?2)
             ON CONFLICT(mobile_no) DO UPDATE SET customer_name = excluded.customer_name",
            params![mobile_no, customer_name],
        )?;
        tracing::debug!(mobile_no, "customer upserted");
        Ok(())
    }

    pub fn get_customer_by_mobile(
        &self,
        mobile_no: &str,
    ) -> Result<Option<Customer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let customer = conn
            .query_row(
                "SELECT mobile_no, customer_name FROM customers WHERE mobile_no = ?1",
                params![mobile_no],
                map_customer,
            )
            .optional()?;
        Ok(customer)
    }

    /// Full scan in insertion order.
    pub fn get_all_customers(&self) -> Result<Vec<Customer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT mobile_no, customer_name FROM customers ORDER BY rowid")?;
        let customers = stmt.query_map([], map_customer)?.collect::<Result<Vec<_>, _>>()?;
        Ok(customers)
    }

    /// Mobile numbers starting with `partial` (case-sensitive).
    pub fn search_mobile_nos(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        let customers = self.get_all_customers()?;
        Ok(MOBILE_MATCH
            .filter(customers, partial, |c| c.mobile_no.as_str())
            .into_iter()
            .map(|c| c.mobile_no)
            .collect())
    }

    /// Customer names containing `partial`, ignoring case.
    pub fn search_customer_names(&self, partial: &str) -> Result<Vec<String>, StorageError> {
        let customers = self.get_all_customers()?;
        Ok(NAME_MATCH
            .filter(customers, partial, |c| c.customer_name.as_str())
            .into_iter()
            .map(|c| c.customer_name)
            .collect())
    }
}

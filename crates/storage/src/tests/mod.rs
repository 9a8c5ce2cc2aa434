//! Test utilities and module declarations for storage tests.

use crate::Storage;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

/// Write a store file by hand, bypassing migrations.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn seed_raw_store(db_path: &Path, sql: &str) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute_batch(sql).unwrap();
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn raw_user_version(db_path: &Path) -> i32 {
    let conn = Connection::open(db_path).unwrap();
    conn.pragma_query_value(None, "user_version", |row| row.get(0)).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn table_count(db_path: &Path, table: &str) -> i64 {
    let conn = Connection::open(db_path).unwrap();
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )
    .unwrap()
}

/// A version 1 store holding two customers and nothing else.
pub const V1_STORE_SQL: &str = "
CREATE TABLE customers (
    mobile_no TEXT PRIMARY KEY,
    customer_name TEXT NOT NULL
);
INSERT INTO customers (mobile_no, customer_name) VALUES ('9998887771', 'Ram Patel');
INSERT INTO customers (mobile_no, customer_name) VALUES ('8887776661', 'Shyam Ram');
PRAGMA user_version = 1;
";

/// A version 1 store whose v2 step cannot complete: an index already owns
/// the `descriptions` name.
pub const BROKEN_V1_STORE_SQL: &str = "
CREATE TABLE customers (
    mobile_no TEXT PRIMARY KEY,
    customer_name TEXT NOT NULL
);
INSERT INTO customers (mobile_no, customer_name) VALUES ('9998887771', 'Ram Patel');
CREATE INDEX descriptions ON customers(customer_name);
PRAGMA user_version = 1;
";

#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod column_helpers;
mod v1;
mod v2;

use column_helpers::rename_column_if_exists;
use pms_suggest_core::SCHEMA_VERSION;
use rusqlite::Connection;

use crate::StorageError;

fn step_failed(version: i32, err: rusqlite::Error) -> StorageError {
    StorageError::Migration(format!("v{version}: {err}"))
}

pub(crate) fn schema_version(conn: &Connection) -> Result<i32, rusqlite::Error> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Bring the store up to [`SCHEMA_VERSION`].
///
/// Every step is additive and the whole run commits together with the new
/// version number, so a failed run leaves the previous version in place.
pub(crate) fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version = schema_version(conn)?;

    tracing::info!("Store schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version > SCHEMA_VERSION {
        tracing::warn!(
            current_version,
            supported = SCHEMA_VERSION,
            "store was written by a newer schema, leaving it untouched"
        );
        return Ok(());
    }
    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;

    if current_version < 1i32 {
        tracing::info!("Running migration v1: customers collection");
        tx.execute_batch(v1::SQL).map_err(|e| step_failed(1, e))?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: descriptions and remarks collections");
        for (from, to) in v2::LEGACY_CUSTOMER_COLUMNS {
            let renamed = rename_column_if_exists(&tx, "customers", from, to)
                .map_err(|e| step_failed(2, e))?;
            if renamed {
                tracing::info!(from, to, "renamed legacy customers column");
            }
        }
        tx.execute_batch(v2::SQL).map_err(|e| step_failed(2, e))?;
    }

    tx.pragma_update(None, "user_version", SCHEMA_VERSION)
        .map_err(|e| step_failed(SCHEMA_VERSION, e))?;
    tx.commit().map_err(|e| step_failed(SCHEMA_VERSION, e))?;
    tracing::info!("Store schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}

//! `SQLite` storage implementation
//!
//! All methods are synchronous; async callers go through
//! [`SuggestionStore`](crate::SuggestionStore), which runs them on the
//! blocking pool.

mod customers;
mod snapshot;
mod vocabulary;

use pms_suggest_core::DEFAULT_POOL_SIZE;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping the `SQLite` connection pool.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Concurrency settings applied to every pooled connection
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl Storage {
    /// Open (creating if needed) and migrate the store at `db_path`.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        Self::open(db_path, DEFAULT_POOL_SIZE)
    }

    pub fn open(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            pool_size = pool_size,
            "Suggestion store initialized with connection pool"
        );

        Ok(Self { pool })
    }

    /// Stored schema version (`PRAGMA user_version`).
    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(migrations::schema_version(&conn)?)
    }
}

use rusqlite::{Connection, OptionalExtension as _};

pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn column_exists(
    conn: &Connection,
    table: &str,
    column: &str,
) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rename `from` to `to` when the table still carries the old column name.
pub fn rename_column_if_exists(
    conn: &Connection,
    table: &str,
    from: &str,
    to: &str,
) -> Result<bool, rusqlite::Error> {
    if !table_exists(conn, table)? || !column_exists(conn, table, from)? {
        return Ok(false);
    }
    if column_exists(conn, table, to)? {
        tracing::warn!(table, from, to, "both legacy and current columns present, skipping rename");
        return Ok(false);
    }
    conn.execute(&format!("ALTER TABLE {table} RENAME COLUMN {from} TO {to}"), [])?;
    Ok(true)
}

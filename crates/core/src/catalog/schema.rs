use rusqlite::Connection;

use crate::error::{Error, Result};

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS labels (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL UNIQUE,
            ref_count INTEGER NOT NULL CHECK (ref_count >= 1)
        );

        CREATE TABLE IF NOT EXISTS items (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            title      TEXT NOT NULL,
            author     TEXT NOT NULL,
            thumb_url  TEXT NOT NULL UNIQUE,
            photo_url  TEXT NOT NULL,
            latitude   REAL NOT NULL,
            longitude  REAL NOT NULL,
            thumb_data BLOB,
            label_id   INTEGER NOT NULL REFERENCES labels(id),
            region     TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_items_label ON items(label_id);
        ",
    )?;
    Ok(())
}

/// Stamp fresh databases with the current schema version and refuse to open
/// databases written by a newer build.
pub fn migrate(conn: &Connection) -> Result<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version == 0 {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        return Ok(());
    }
    if version > SCHEMA_VERSION {
        return Err(Error::SchemaTooNew {
            db: version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(())
}

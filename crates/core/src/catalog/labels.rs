use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::error;

use crate::domain::Label;
use crate::error::{Error, Result};

fn from_row(row: &Row) -> rusqlite::Result<Label> {
    Ok(Label {
        id: row.get(0)?,
        name: row.get(1)?,
        ref_count: row.get(2)?,
    })
}

pub(crate) fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Label>> {
    let label = conn
        .query_row(
            "SELECT id, name, ref_count FROM labels WHERE name = ?1",
            params![name],
            from_row,
        )
        .optional()?;
    Ok(label)
}

pub(crate) fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Label>> {
    let label = conn
        .query_row(
            "SELECT id, name, ref_count FROM labels WHERE id = ?1",
            params![id],
            from_row,
        )
        .optional()?;
    Ok(label)
}

pub(crate) fn list_all(conn: &Connection) -> Result<Vec<Label>> {
    let mut stmt = conn.prepare("SELECT id, name, ref_count FROM labels ORDER BY name")?;
    let labels = stmt
        .query_map([], from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(labels)
}

/// Take a reference on `name`: increment the count of an existing label, or
/// create it with a count of 1. Returns the label id either way.
///
/// Callers must hold the engine's write lock — the read-then-write pair here
/// is only atomic under it.
pub(crate) fn insert_or_touch(conn: &Connection, name: &str) -> Result<i64> {
    if let Some(label) = find_by_name(conn, name)? {
        conn.execute(
            "UPDATE labels SET ref_count = ref_count + 1 WHERE id = ?1",
            params![label.id],
        )?;
        return Ok(label.id);
    }
    conn.execute(
        "INSERT INTO labels (name, ref_count) VALUES (?1, 1)",
        params![name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Drop one reference on a label, deleting the row when the last reference
/// goes away. Releasing an id with no row means releases have outrun
/// acquisitions — an engine defect, not caller input.
pub(crate) fn release(conn: &Connection, id: i64) -> Result<()> {
    let label = find_by_id(conn, id)?.ok_or_else(|| {
        error!(label_id = id, "release of a label that does not exist");
        Error::InvariantViolation(format!("released label {id} does not exist"))
    })?;
    if label.ref_count <= 1 {
        conn.execute("DELETE FROM labels WHERE id = ?1", params![id])?;
    } else {
        conn.execute(
            "UPDATE labels SET ref_count = ref_count - 1 WHERE id = ?1",
            params![id],
        )?;
    }
    Ok(())
}

pub(crate) fn delete_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM labels", [])?;
    Ok(())
}

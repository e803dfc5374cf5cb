use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{Item, NewItem};
use crate::error::{Error, Result};

fn from_row(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        thumb_url: row.get(3)?,
        photo_url: row.get(4)?,
        latitude: row.get(5)?,
        longitude: row.get(6)?,
        thumb_data: row.get(7)?,
        label_id: row.get(8)?,
        region: row.get(9)?,
        created_at: row.get(10)?,
    })
}

/// Exact-match lookup on the natural key.
pub(crate) fn find_by_thumb_url(conn: &Connection, thumb_url: &str) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            "SELECT id, title, author, thumb_url, photo_url, latitude, longitude,
                    thumb_data, label_id, region, created_at
             FROM items WHERE thumb_url = ?1",
            params![thumb_url],
            from_row,
        )
        .optional()?;
    Ok(item)
}

pub(crate) fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Item>> {
    let item = conn
        .query_row(
            "SELECT id, title, author, thumb_url, photo_url, latitude, longitude,
                    thumb_data, label_id, region, created_at
             FROM items WHERE id = ?1",
            params![id],
            from_row,
        )
        .optional()?;
    Ok(item)
}

/// Full scan, newest first. Order is stable within one scan only.
pub(crate) fn list_all(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, thumb_url, photo_url, latitude, longitude,
                thumb_data, label_id, region, created_at
         FROM items ORDER BY created_at DESC, id DESC",
    )?;
    let items = stmt
        .query_map([], from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(items)
}

pub(crate) fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    Ok(count as usize)
}

pub(crate) fn insert(
    conn: &Connection,
    item: &NewItem,
    thumb_data: Option<&[u8]>,
    label_id: i64,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO items (title, author, thumb_url, photo_url, latitude, longitude,
                            thumb_data, label_id, region, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            item.title,
            item.author,
            item.thumb_url,
            item.photo_url,
            item.latitude,
            item.longitude,
            thumb_data,
            label_id,
            "",
            Utc::now(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Repoint an item at a different label. Touches nothing else.
pub(crate) fn update_label_ref(conn: &Connection, id: i64, label_id: i64) -> Result<()> {
    let changed = conn.execute(
        "UPDATE items SET label_id = ?1 WHERE id = ?2",
        params![label_id, id],
    )?;
    if changed == 0 {
        return Err(Error::ItemNotFound(id));
    }
    Ok(())
}

pub(crate) fn delete(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
    if deleted == 0 {
        return Err(Error::ItemNotFound(id));
    }
    Ok(())
}

pub(crate) fn delete_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM items", [])?;
    Ok(())
}

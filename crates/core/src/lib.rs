mod catalog;
pub mod domain;
pub mod error;
pub mod thumb;

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use image::DynamicImage;
use rusqlite::Connection;
use tracing::{debug, error};

use catalog::{items, labels, schema};
use domain::{Item, Label, NewItem, MAX_ITEMS, UNDEFINED_LABEL};
use error::{Error, Result};

/// The favorites catalog: items deduplicated by thumbnail URL, each tagged
/// with exactly one label, label rows reference-counted and garbage-collected
/// at zero.
///
/// The two tables are mutated by separate statements, so every public
/// operation takes the connection lock and runs its steps in one transaction.
/// No partial state is visible to other callers, and racing writers
/// serialize instead of double-inserting a label or overshooting capacity.
pub struct Favorites {
    conn: Mutex<Connection>,
}

impl Favorites {
    /// Open or create a catalog at the given path with WAL mode.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::initialize(&conn)?;
        schema::migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory catalog (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::initialize(&conn)?;
        schema::migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock means a panic mid-operation. Whatever transaction
        // was in flight has already rolled back, so the connection is sound.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Favorite a photo. The thumbnail, if given, is compressed to JPEG and
    /// stored on the row; the new item starts out on the "undefined" label.
    ///
    /// Fails with `CapacityExceeded` at the item limit, `DuplicateItem` when
    /// the thumbnail URL is already favorited, and `Encoding` when the
    /// thumbnail cannot be compressed. No rows are written on any failure.
    pub fn add_item(&self, item: &NewItem, thumbnail: Option<&DynamicImage>) -> Result<i64> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        if items::count(&tx)? >= MAX_ITEMS {
            return Err(Error::CapacityExceeded { limit: MAX_ITEMS });
        }
        if items::find_by_thumb_url(&tx, &item.thumb_url)?.is_some() {
            return Err(Error::DuplicateItem(item.thumb_url.clone()));
        }

        // Encode after the checks (a full or duplicate catalog takes
        // precedence over a bad thumbnail) but before any write, so an
        // encoding failure still leaves no rows behind.
        let thumb_data = thumbnail.map(thumb::encode).transpose()?;

        let label_id = labels::insert_or_touch(&tx, UNDEFINED_LABEL)?;
        let id = items::insert(&tx, item, thumb_data.as_deref(), label_id)?;
        tx.commit()?;

        debug!(id, thumb_url = %item.thumb_url, "favorite added");
        Ok(id)
    }

    /// Move an item to the label named `new_label`, creating the label if
    /// needed and garbage-collecting the old one if this was its last
    /// reference. Returns the item's label id after the call; when the item
    /// already carries `new_label` this is a no-op returning the current id.
    pub fn retag_item(&self, item_id: i64, new_label: &str) -> Result<i64> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        let item = items::find_by_id(&tx, item_id)?.ok_or(Error::ItemNotFound(item_id))?;
        let current = labels::find_by_id(&tx, item.label_id)?.ok_or_else(|| {
            error!(item_id, label_id = item.label_id, "item references a missing label");
            Error::InvariantViolation(format!(
                "item {item_id} references missing label {}",
                item.label_id
            ))
        })?;

        if current.name == new_label {
            return Ok(current.id);
        }

        // Acquire, repoint, release: the item points at a live label row at
        // every step, so the foreign key holds even mid-transaction.
        let new_id = labels::insert_or_touch(&tx, new_label)?;
        items::update_label_ref(&tx, item_id, new_id)?;
        labels::release(&tx, current.id)?;
        tx.commit()?;

        debug!(item_id, label = new_label, "favorite retagged");
        Ok(new_id)
    }

    /// Remove a favorite and drop its label reference. Both steps are one
    /// transaction, and the item row goes first — a torn write could only
    /// leave an unreferenced but still-counted label, never a dangling item.
    pub fn delete_item(&self, item_id: i64) -> Result<()> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;

        let item = items::find_by_id(&tx, item_id)?.ok_or(Error::ItemNotFound(item_id))?;
        items::delete(&tx, item_id)?;
        labels::release(&tx, item.label_id)?;
        tx.commit()?;

        debug!(item_id, "favorite deleted");
        Ok(())
    }

    /// The label name shown for an item, or `None` when the item is gone,
    /// its label row is gone, or the label is the "undefined" placeholder.
    pub fn display_label(&self, item_id: i64) -> Result<Option<String>> {
        let conn = self.lock();
        let Some(item) = items::find_by_id(&conn, item_id)? else {
            return Ok(None);
        };
        let Some(label) = labels::find_by_id(&conn, item.label_id)? else {
            return Ok(None);
        };
        if label.name == UNDEFINED_LABEL {
            return Ok(None);
        }
        Ok(Some(label.name))
    }

    /// Clear both tables. Full reset — no per-row bookkeeping needed.
    pub fn purge_all(&self) -> Result<()> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        items::delete_all(&tx)?;
        labels::delete_all(&tx)?;
        tx.commit()?;

        debug!("catalog purged");
        Ok(())
    }

    /// All favorites, newest first.
    pub fn items(&self) -> Result<Vec<Item>> {
        items::list_all(&self.lock())
    }

    /// All labels in use, including the "undefined" placeholder if live.
    pub fn labels(&self) -> Result<Vec<Label>> {
        labels::list_all(&self.lock())
    }

    pub fn get_item(&self, item_id: i64) -> Result<Item> {
        items::find_by_id(&self.lock(), item_id)?.ok_or(Error::ItemNotFound(item_id))
    }

    pub fn count(&self) -> Result<usize> {
        items::count(&self.lock())
    }

    /// Recompute per-label referrer counts from the items table and compare
    /// them with the stored ref_counts. Any drift means the bookkeeping is
    /// broken and is reported as an `InvariantViolation`.
    pub fn verify_integrity(&self) -> Result<()> {
        let conn = self.lock();

        let orphans: i64 = conn.query_row(
            "SELECT COUNT(*) FROM items WHERE label_id NOT IN (SELECT id FROM labels)",
            [],
            |row| row.get(0),
        )?;
        if orphans > 0 {
            error!(orphans, "items reference labels that do not exist");
            return Err(Error::InvariantViolation(format!(
                "{orphans} item(s) reference missing labels"
            )));
        }

        let mut stmt = conn.prepare(
            "SELECT l.name, l.ref_count,
                    (SELECT COUNT(*) FROM items i WHERE i.label_id = l.id)
             FROM labels l",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // The CHECK constraint keeps stored >= 1, so a label with zero live
        // referrers always shows up here as stored != actual.
        for (name, stored, actual) in rows {
            if stored != actual {
                error!(label = %name, stored, actual, "label ref_count drifted");
                return Err(Error::InvariantViolation(format!(
                    "label '{name}' has ref_count {stored} but {actual} live referrer(s)"
                )));
            }
        }
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Label name assigned to new items until the user tags them.
/// Stored like any other label, but never shown as a display label.
pub const UNDEFINED_LABEL: &str = "undefined";

/// Maximum number of live items in the catalog.
pub const MAX_ITEMS: usize = 256;

/// A favorited photo record.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Natural key — unique across all live items.
    pub thumb_url: String,
    pub photo_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Compressed thumbnail, if one was captured at add time.
    #[serde(skip)]
    pub thumb_data: Option<Vec<u8>>,
    /// Always references a live label row.
    pub label_id: i64,
    /// Reserved; currently always empty.
    pub region: String,
    pub created_at: DateTime<Utc>,
}

/// A named tag shared by every item carrying it.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    /// Number of live items referencing this label. Always >= 1 while
    /// the row exists; the row is deleted when it would reach 0.
    pub ref_count: i64,
}

/// Caller-supplied fields for a new favorite.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub title: String,
    pub author: String,
    pub thumb_url: String,
    pub photo_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

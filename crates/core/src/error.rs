#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("thumbnail encoding failed: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("item not found: {0}")]
    ItemNotFound(i64),

    #[error("already favorited: {0}")]
    DuplicateItem(String),

    #[error("catalog is full ({limit} items)")]
    CapacityExceeded { limit: usize },

    #[error("database schema version {db} is newer than this build supports ({supported})")]
    SchemaTooNew { db: i64, supported: i64 },

    #[error("catalog invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

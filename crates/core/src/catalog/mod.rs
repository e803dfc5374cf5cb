//! SQLite row stores for the two catalog tables. Mutators are crate-private:
//! every write goes through the engine in `lib.rs`, which is what keeps the
//! label reference counts equal to the live referrer counts.

pub(crate) mod items;
pub(crate) mod labels;
pub(crate) mod schema;

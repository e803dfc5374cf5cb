pub mod add;
pub mod check;
pub mod labels;
pub mod ls;
pub mod purge;
pub mod rm;
pub mod tag;

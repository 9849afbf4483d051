//! Infrastructure: SQLite store handle and table definitions.

pub mod db;
pub mod schema;

pub use db::{init_db, Db};
pub use schema::ensure_schema;

//! SQLite store handle.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to the zoo store file.
///
/// Holds no connection: every operation opens its own through
/// [`Db::connect`] and drops it on return, so the handle is cheap to clone
/// into request tasks.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection with foreign keys enforced.
    ///
    /// SQLite leaves `foreign_keys` off per connection, and the cascade rules
    /// in the schema only fire when it is on.
    pub fn connect(&self, op: &'static str) -> Result<Connection, AppError> {
        let conn = Connection::open(&self.path).map_err(AppError::op(op))?;
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(AppError::op(op))?;
        Ok(conn)
    }
}

/// Initialize DB at path, ensure every table exists, return the handle.
pub fn init_db(db_path: &Path) -> Result<Db, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
        }
    }
    let db = Db::new(db_path);
    super::schema::ensure_schema(&db)?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("zoo.db");
        let db = init_db(&path).unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), path.as_path());
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let db = init_db(&dir.path().join("zoo.db")).unwrap();
        let conn = db.connect("test").unwrap();
        let on: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |r| r.get(0))
            .unwrap();
        assert_eq!(on, 1);
    }

    #[test]
    fn connect_to_unreachable_path_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let db = Db::new(dir.path().join("missing").join("zoo.db"));
        let err = db.connect("zoo_list").unwrap_err();
        assert_eq!(err.code(), "DB_UNAVAILABLE");
        assert!(err.to_string().starts_with("Error in zoo_list: "));
    }
}

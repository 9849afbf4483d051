//! Zoo use cases: create, list, delete.

use crate::error::AppError;
use crate::infra::Db;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooCreateReq {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZooDto {
    pub id: i64,
    pub name: String,
}

fn row_to_zoo(row: &Row<'_>) -> rusqlite::Result<ZooDto> {
    Ok(ZooDto {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub(crate) fn query_zoos(conn: &Connection) -> rusqlite::Result<Vec<ZooDto>> {
    let mut stmt = conn.prepare("SELECT id, name FROM zoos")?;
    let rows = stmt.query_map([], row_to_zoo)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a zoo. Returns the request as given; the new id is not read back.
pub fn zoo_create(db: &Db, req: ZooCreateReq) -> Result<ZooCreateReq, AppError> {
    const OP: &str = "zoo_create";
    let conn = db.connect(OP)?;
    conn.execute("INSERT INTO zoos (name) VALUES (?1)", params![&req.name])
        .map_err(AppError::op(OP))?;
    Ok(req)
}

pub fn zoo_list(db: &Db) -> Result<Vec<ZooDto>, AppError> {
    const OP: &str = "zoo_list";
    let conn = db.connect(OP)?;
    query_zoos(&conn).map_err(AppError::op(OP))
}

/// Delete a zoo and, through the schema's cascades, everything it owns.
/// Succeeds whether or not the id existed.
pub fn zoo_delete(db: &Db, zoo_id: i64) -> Result<(), AppError> {
    const OP: &str = "zoo_delete";
    let conn = db.connect(OP)?;
    let removed = conn
        .execute("DELETE FROM zoos WHERE id = ?1", [zoo_id])
        .map_err(AppError::op(OP))?;
    log::debug!("zoo_delete id={} removed={}", zoo_id, removed);
    Ok(())
}

//! Enclosure use cases: create, get, list by zoo, delete.

use crate::error::AppError;
use crate::infra::Db;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureCreateReq {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnclosureDto {
    pub id: i64,
    pub zoo_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

fn row_to_enclosure(row: &Row<'_>) -> rusqlite::Result<EnclosureDto> {
    Ok(EnclosureDto {
        id: row.get(0)?,
        zoo_id: row.get(1)?,
        name: row.get(2)?,
        kind: row.get(3)?,
    })
}

pub(crate) fn query_enclosures_by_zoo(
    conn: &Connection,
    zoo_id: i64,
) -> rusqlite::Result<Vec<EnclosureDto>> {
    let mut stmt =
        conn.prepare("SELECT id, zoo_id, name, type FROM enclosures WHERE zoo_id = ?1")?;
    let rows = stmt.query_map([zoo_id], row_to_enclosure)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn enclosure_create(
    db: &Db,
    zoo_id: i64,
    req: EnclosureCreateReq,
) -> Result<EnclosureCreateReq, AppError> {
    const OP: &str = "enclosure_create";
    let conn = db.connect(OP)?;
    conn.execute(
        "INSERT INTO enclosures (zoo_id, name, type) VALUES (?1, ?2, ?3)",
        params![zoo_id, &req.name, &req.kind],
    )
    .map_err(AppError::op(OP))?;
    Ok(req)
}

/// One enclosure, scoped to its zoo. A miss is `NOT_FOUND`.
pub fn enclosure_get(db: &Db, zoo_id: i64, enclosure_id: i64) -> Result<EnclosureDto, AppError> {
    const OP: &str = "enclosure_get";
    let conn = db.connect(OP)?;
    conn.query_row(
        "SELECT id, zoo_id, name, type FROM enclosures WHERE zoo_id = ?1 AND id = ?2",
        [zoo_id, enclosure_id],
        row_to_enclosure,
    )
    .map_err(AppError::op(OP))
}

pub fn enclosure_list_by_zoo(db: &Db, zoo_id: i64) -> Result<Vec<EnclosureDto>, AppError> {
    const OP: &str = "enclosure_list_by_zoo";
    let conn = db.connect(OP)?;
    query_enclosures_by_zoo(&conn, zoo_id).map_err(AppError::op(OP))
}

pub fn enclosure_delete(db: &Db, enclosure_id: i64) -> Result<(), AppError> {
    const OP: &str = "enclosure_delete";
    let conn = db.connect(OP)?;
    conn.execute("DELETE FROM enclosures WHERE id = ?1", [enclosure_id])
        .map_err(AppError::op(OP))?;
    Ok(())
}

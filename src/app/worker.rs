//! Worker use cases.

use crate::error::AppError;
use crate::infra::Db;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerCreateReq {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerDto {
    pub id: i64,
    pub zoo_id: i64,
    pub name: String,
    pub role: String,
}

fn row_to_worker(row: &Row<'_>) -> rusqlite::Result<WorkerDto> {
    Ok(WorkerDto {
        id: row.get(0)?,
        zoo_id: row.get(1)?,
        name: row.get(2)?,
        role: row.get(3)?,
    })
}

pub(crate) fn query_workers_by_zoo(
    conn: &Connection,
    zoo_id: i64,
) -> rusqlite::Result<Vec<WorkerDto>> {
    let mut stmt = conn.prepare("SELECT id, zoo_id, name, role FROM workers WHERE zoo_id = ?1")?;
    let rows = stmt.query_map([zoo_id], row_to_worker)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn worker_create(
    db: &Db,
    zoo_id: i64,
    req: WorkerCreateReq,
) -> Result<WorkerCreateReq, AppError> {
    const OP: &str = "worker_create";
    let conn = db.connect(OP)?;
    conn.execute(
        "INSERT INTO workers (zoo_id, name, role) VALUES (?1, ?2, ?3)",
        params![zoo_id, &req.name, &req.role],
    )
    .map_err(AppError::op(OP))?;
    Ok(req)
}

pub fn worker_list_by_zoo(db: &Db, zoo_id: i64) -> Result<Vec<WorkerDto>, AppError> {
    const OP: &str = "worker_list_by_zoo";
    let conn = db.connect(OP)?;
    query_workers_by_zoo(&conn, zoo_id).map_err(AppError::op(OP))
}

/// Delete a worker and its interactions.
pub fn worker_delete(db: &Db, worker_id: i64) -> Result<(), AppError> {
    const OP: &str = "worker_delete";
    let conn = db.connect(OP)?;
    conn.execute("DELETE FROM workers WHERE id = ?1", [worker_id])
        .map_err(AppError::op(OP))?;
    Ok(())
}

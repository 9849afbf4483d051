//! Worker-animal interaction use cases.

use crate::error::AppError;
use crate::infra::Db;
use rusqlite::params;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionDto {
    pub id: i64,
    pub zoo_id: i64,
    pub worker_id: i64,
    pub animal_id: i64,
}

/// Record a worker talking to an animal. Duplicates accumulate.
pub fn interaction_create(
    db: &Db,
    zoo_id: i64,
    worker_id: i64,
    animal_id: i64,
) -> Result<(), AppError> {
    const OP: &str = "interaction_create";
    let conn = db.connect(OP)?;
    conn.execute(
        "INSERT INTO interactions (zoo_id, worker_id, animal_id) VALUES (?1, ?2, ?3)",
        params![zoo_id, worker_id, animal_id],
    )
    .map_err(AppError::op(OP))?;
    Ok(())
}

pub fn interaction_list_by_zoo(db: &Db, zoo_id: i64) -> Result<Vec<InteractionDto>, AppError> {
    const OP: &str = "interaction_list_by_zoo";
    let conn = db.connect(OP)?;
    let mut stmt = conn
        .prepare("SELECT id, zoo_id, worker_id, animal_id FROM interactions WHERE zoo_id = ?1")
        .map_err(AppError::op(OP))?;
    let rows = stmt
        .query_map([zoo_id], |r| {
            Ok(InteractionDto {
                id: r.get(0)?,
                zoo_id: r.get(1)?,
                worker_id: r.get(2)?,
                animal_id: r.get(3)?,
            })
        })
        .map_err(AppError::op(OP))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::op(OP))?);
    }
    Ok(out)
}

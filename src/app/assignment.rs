//! Animal-to-enclosure assignment use cases: create, list by zoo.

use crate::error::AppError;
use crate::infra::Db;
use rusqlite::params;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentDto {
    pub id: i64,
    pub zoo_id: i64,
    pub animal_id: i64,
    pub enclosure_id: i64,
}

/// Place an animal into an enclosure. Additive: repeating the same triple
/// stores another row. Each id must reference an existing row.
pub fn assignment_create(
    db: &Db,
    zoo_id: i64,
    animal_id: i64,
    enclosure_id: i64,
) -> Result<(), AppError> {
    const OP: &str = "assignment_create";
    let conn = db.connect(OP)?;
    conn.execute(
        "INSERT INTO animal_enclosure_assignments (zoo_id, animal_id, enclosure_id) VALUES (?1, ?2, ?3)",
        params![zoo_id, animal_id, enclosure_id],
    )
    .map_err(AppError::op(OP))?;
    Ok(())
}

pub fn assignment_list_by_zoo(db: &Db, zoo_id: i64) -> Result<Vec<AssignmentDto>, AppError> {
    const OP: &str = "assignment_list_by_zoo";
    let conn = db.connect(OP)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, zoo_id, animal_id, enclosure_id \
             FROM animal_enclosure_assignments \
             WHERE zoo_id = ?1",
        )
        .map_err(AppError::op(OP))?;
    let rows = stmt
        .query_map([zoo_id], |r| {
            Ok(AssignmentDto {
                id: r.get(0)?,
                zoo_id: r.get(1)?,
                animal_id: r.get(2)?,
                enclosure_id: r.get(3)?,
            })
        })
        .map_err(AppError::op(OP))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::op(OP))?);
    }
    Ok(out)
}

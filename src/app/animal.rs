//! Animal use cases: create, list (all, by zoo, hungry), delete.

use crate::error::AppError;
use crate::infra::Db;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalCreateReq {
    #[serde(default)]
    pub id: Option<i64>,
    pub species: String,
    pub name: String,
    pub age: i64,
    #[serde(default)]
    pub last_time_food_served: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalDto {
    pub id: i64,
    pub zoo_id: i64,
    pub species: String,
    pub name: String,
    pub age: i64,
    pub last_time_food_served: Option<String>,
}

const SELECT_ANIMALS: &str =
    "SELECT id, zoo_id, species, name, age, last_time_food_served FROM animals";

fn row_to_animal(row: &Row<'_>) -> rusqlite::Result<AnimalDto> {
    Ok(AnimalDto {
        id: row.get(0)?,
        zoo_id: row.get(1)?,
        species: row.get(2)?,
        name: row.get(3)?,
        age: row.get(4)?,
        last_time_food_served: row.get(5)?,
    })
}

pub(crate) fn query_animals_by_zoo(
    conn: &Connection,
    zoo_id: i64,
) -> rusqlite::Result<Vec<AnimalDto>> {
    let mut stmt = conn.prepare(&format!("{} WHERE zoo_id = ?1", SELECT_ANIMALS))?;
    let rows = stmt.query_map([zoo_id], row_to_animal)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert an animal into `zoo_id`. Fails with a constraint violation when
/// the zoo does not exist. Returns the request as given.
pub fn animal_create(
    db: &Db,
    zoo_id: i64,
    req: AnimalCreateReq,
) -> Result<AnimalCreateReq, AppError> {
    const OP: &str = "animal_create";
    let conn = db.connect(OP)?;
    conn.execute(
        "INSERT INTO animals (zoo_id, species, name, age, last_time_food_served) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![zoo_id, &req.species, &req.name, req.age, &req.last_time_food_served],
    )
    .map_err(AppError::op(OP))?;
    Ok(req)
}

pub fn animal_list(db: &Db) -> Result<Vec<AnimalDto>, AppError> {
    const OP: &str = "animal_list";
    let conn = db.connect(OP)?;
    let mut stmt = conn.prepare(SELECT_ANIMALS).map_err(AppError::op(OP))?;
    let rows = stmt
        .query_map([], row_to_animal)
        .map_err(AppError::op(OP))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::op(OP))?);
    }
    Ok(out)
}

pub fn animal_list_by_zoo(db: &Db, zoo_id: i64) -> Result<Vec<AnimalDto>, AppError> {
    const OP: &str = "animal_list_by_zoo";
    let conn = db.connect(OP)?;
    query_animals_by_zoo(&conn, zoo_id).map_err(AppError::op(OP))
}

/// Animals in `zoo_id` that have never been fed.
pub fn animal_list_hungry(db: &Db, zoo_id: i64) -> Result<Vec<AnimalDto>, AppError> {
    const OP: &str = "animal_list_hungry";
    let conn = db.connect(OP)?;
    let mut stmt = conn
        .prepare(&format!(
            "{} WHERE zoo_id = ?1 AND last_time_food_served IS NULL",
            SELECT_ANIMALS
        ))
        .map_err(AppError::op(OP))?;
    let rows = stmt
        .query_map([zoo_id], row_to_animal)
        .map_err(AppError::op(OP))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(AppError::op(OP))?);
    }
    Ok(out)
}

/// Delete an animal with its assignments and interactions.
/// Succeeds whether or not the id existed.
pub fn animal_delete(db: &Db, animal_id: i64) -> Result<(), AppError> {
    const OP: &str = "animal_delete";
    let conn = db.connect(OP)?;
    conn.execute("DELETE FROM animals WHERE id = ?1", [animal_id])
        .map_err(AppError::op(OP))?;
    Ok(())
}

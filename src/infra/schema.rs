//! Table definitions. Each create is idempotent and runs on its own
//! connection; `ensure_schema` runs them all, parents first.

use super::Db;
use crate::error::AppError;

const ZOOS: &str = "CREATE TABLE IF NOT EXISTS zoos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)";

const ANIMALS: &str = "CREATE TABLE IF NOT EXISTS animals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    zoo_id INTEGER NOT NULL,
    species TEXT NOT NULL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    last_time_food_served TEXT,
    FOREIGN KEY (zoo_id) REFERENCES zoos (id) ON DELETE CASCADE
)";

const ENCLOSURES: &str = "CREATE TABLE IF NOT EXISTS enclosures (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    zoo_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    FOREIGN KEY (zoo_id) REFERENCES zoos (id) ON DELETE CASCADE
)";

const WORKERS: &str = "CREATE TABLE IF NOT EXISTS workers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    zoo_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    role TEXT NOT NULL,
    FOREIGN KEY (zoo_id) REFERENCES zoos (id) ON DELETE CASCADE
)";

const ASSIGNMENTS: &str = "CREATE TABLE IF NOT EXISTS animal_enclosure_assignments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    zoo_id INTEGER NOT NULL,
    animal_id INTEGER NOT NULL,
    enclosure_id INTEGER NOT NULL,
    FOREIGN KEY (zoo_id) REFERENCES zoos (id) ON DELETE CASCADE,
    FOREIGN KEY (animal_id) REFERENCES animals (id) ON DELETE CASCADE,
    FOREIGN KEY (enclosure_id) REFERENCES enclosures (id) ON DELETE CASCADE
)";

const INTERACTIONS: &str = "CREATE TABLE IF NOT EXISTS interactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    zoo_id INTEGER NOT NULL,
    worker_id INTEGER NOT NULL,
    animal_id INTEGER NOT NULL,
    FOREIGN KEY (zoo_id) REFERENCES zoos (id) ON DELETE CASCADE,
    FOREIGN KEY (worker_id) REFERENCES workers (id) ON DELETE CASCADE,
    FOREIGN KEY (animal_id) REFERENCES animals (id) ON DELETE CASCADE
)";

fn create_table(db: &Db, op: &'static str, ddl: &str) -> Result<(), AppError> {
    let conn = db.connect(op)?;
    conn.execute(ddl, []).map_err(AppError::op(op))?;
    Ok(())
}

pub fn create_zoos(db: &Db) -> Result<(), AppError> {
    create_table(db, "create_zoos", ZOOS)
}

pub fn create_animals(db: &Db) -> Result<(), AppError> {
    create_table(db, "create_animals", ANIMALS)
}

pub fn create_enclosures(db: &Db) -> Result<(), AppError> {
    create_table(db, "create_enclosures", ENCLOSURES)
}

pub fn create_workers(db: &Db) -> Result<(), AppError> {
    create_table(db, "create_workers", WORKERS)
}

pub fn create_animal_enclosure_assignments(db: &Db) -> Result<(), AppError> {
    create_table(db, "create_animal_enclosure_assignments", ASSIGNMENTS)
}

pub fn create_interactions(db: &Db) -> Result<(), AppError> {
    create_table(db, "create_interactions", INTERACTIONS)
}

/// Ensure all six tables exist. Safe to call on every start.
pub fn ensure_schema(db: &Db) -> Result<(), AppError> {
    create_zoos(db)?;
    create_workers(db)?;
    create_enclosures(db)?;
    create_animals(db)?;
    create_animal_enclosure_assignments(db)?;
    create_interactions(db)?;
    log::info!("Schema ready at {:?}", db.path());
    Ok(())
}

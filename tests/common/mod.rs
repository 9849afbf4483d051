//! Shared helpers for integration tests.

#![allow(dead_code)]

use app_lib::app::{
    animal_create, enclosure_create, worker_create, zoo_create, zoo_list, AnimalCreateReq,
    EnclosureCreateReq, WorkerCreateReq, ZooCreateReq,
};
use app_lib::infra::{init_db, Db};
use std::ops::Deref;
use tempfile::TempDir;

/// A schema-ready store in its own temp directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    db: Db,
}

impl Deref for TestDb {
    type Target = Db;

    fn deref(&self) -> &Db {
        &self.db
    }
}

pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db = init_db(&dir.path().join("zoo_database.db")).unwrap();
    TestDb { _dir: dir, db }
}

/// Insert a zoo and return its store-assigned id.
pub fn seed_zoo(db: &Db, name: &str) -> i64 {
    zoo_create(
        db,
        ZooCreateReq {
            id: None,
            name: name.to_string(),
        },
    )
    .unwrap();
    zoo_list(db)
        .unwrap()
        .into_iter()
        .rev()
        .find(|z| z.name == name)
        .unwrap()
        .id
}

pub fn animal_req(species: &str, name: &str, age: i64) -> AnimalCreateReq {
    AnimalCreateReq {
        id: None,
        species: species.to_string(),
        name: name.to_string(),
        age,
        last_time_food_served: None,
    }
}

pub fn seed_animal(db: &Db, zoo_id: i64, name: &str) {
    animal_create(db, zoo_id, animal_req("Lion", name, 5)).unwrap();
}

pub fn seed_enclosure(db: &Db, zoo_id: i64, name: &str) {
    enclosure_create(
        db,
        zoo_id,
        EnclosureCreateReq {
            id: None,
            name: name.to_string(),
            kind: "outdoor".to_string(),
        },
    )
    .unwrap();
}

pub fn seed_worker(db: &Db, zoo_id: i64, name: &str) {
    worker_create(
        db,
        zoo_id,
        WorkerCreateReq {
            id: None,
            name: name.to_string(),
            role: "keeper".to_string(),
        },
    )
    .unwrap();
}

/// Row count of `table`, read straight from the store.
pub fn count_rows(db: &Db, table: &str) -> i64 {
    let conn = db.connect("count_rows").unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .unwrap()
}

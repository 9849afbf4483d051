//! Nested view of every zoo with its animals, workers and enclosures.

use super::animal::{query_animals_by_zoo, AnimalDto};
use super::enclosure::{query_enclosures_by_zoo, EnclosureDto};
use super::worker::{query_workers_by_zoo, WorkerDto};
use super::zoo::query_zoos;
use crate::error::AppError;
use crate::infra::Db;
use rusqlite::TransactionBehavior;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZooSnapshotDto {
    pub id: i64,
    pub name: String,
    pub animals: Vec<AnimalDto>,
    #[serde(rename = "worker")]
    pub workers: Vec<WorkerDto>,
    #[serde(rename = "enclosure")]
    pub enclosures: Vec<EnclosureDto>,
}

/// Every zoo with its animals, workers and enclosures.
///
/// The 1+3N reads share one deferred transaction, so a zoo deleted by
/// another connection mid-read cannot leave a half-populated entry.
pub fn zoo_snapshot(db: &Db) -> Result<Vec<ZooSnapshotDto>, AppError> {
    const OP: &str = "zoo_snapshot";
    let mut conn = db.connect(OP)?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Deferred)
        .map_err(AppError::op(OP))?;

    let zoos = query_zoos(&tx).map_err(AppError::op(OP))?;
    let mut out = Vec::with_capacity(zoos.len());
    for zoo in zoos {
        out.push(ZooSnapshotDto {
            animals: query_animals_by_zoo(&tx, zoo.id).map_err(AppError::op(OP))?,
            workers: query_workers_by_zoo(&tx, zoo.id).map_err(AppError::op(OP))?,
            enclosures: query_enclosures_by_zoo(&tx, zoo.id).map_err(AppError::op(OP))?,
            id: zoo.id,
            name: zoo.name,
        });
    }

    tx.commit().map_err(AppError::op(OP))?;
    Ok(out)
}

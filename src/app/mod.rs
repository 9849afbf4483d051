//! Application use cases, one function per operation.

mod animal;
mod assignment;
mod enclosure;
mod interaction;
mod snapshot;
mod worker;
mod zoo;

pub use animal::{
    animal_create, animal_delete, animal_list, animal_list_by_zoo, animal_list_hungry,
    AnimalCreateReq, AnimalDto,
};
pub use assignment::{assignment_create, assignment_list_by_zoo, AssignmentDto};
pub use enclosure::{
    enclosure_create, enclosure_delete, enclosure_get, enclosure_list_by_zoo,
    EnclosureCreateReq, EnclosureDto,
};
pub use interaction::{interaction_create, interaction_list_by_zoo, InteractionDto};
pub use snapshot::{zoo_snapshot, ZooSnapshotDto};
pub use worker::{worker_create, worker_delete, worker_list_by_zoo, WorkerCreateReq, WorkerDto};
pub use zoo::{zoo_create, zoo_delete, zoo_list, ZooCreateReq, ZooDto};

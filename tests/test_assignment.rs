//! Animal-enclosure assignment integration tests

mod common;

use app_lib::app::{assignment_create, assignment_list_by_zoo};
use common::{init_test_db, seed_animal, seed_enclosure, seed_zoo};

#[test]
fn duplicate_assignments_accumulate() {
    let pool = init_test_db();
    let zoo = seed_zoo(&pool, "Metro Zoo");
    seed_animal(&pool, zoo, "Leo");
    seed_enclosure(&pool, zoo, "Savanna");

    assignment_create(&pool, zoo, 1, 1).unwrap();
    assignment_create(&pool, zoo, 1, 1).unwrap();

    let rows = assignment_list_by_zoo(&pool, zoo).unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
    assert!(rows
        .iter()
        .all(|a| a.zoo_id == zoo && a.animal_id == 1 && a.enclosure_id == 1));
}

#[test]
fn assignment_to_missing_enclosure_fails() {
    let pool = init_test_db();
    let zoo = seed_zoo(&pool, "Metro Zoo");
    seed_animal(&pool, zoo, "Leo");

    let err = assignment_create(&pool, zoo, 1, 99).unwrap_err();
    assert_eq!(err.code(), "CONSTRAINT_VIOLATION");
    assert!(err.to_string().starts_with("Error in assignment_create: "));
    assert!(assignment_list_by_zoo(&pool, zoo).unwrap().is_empty());
}

#[test]
fn assignment_of_missing_animal_fails() {
    let pool = init_test_db();
    let zoo = seed_zoo(&pool, "Metro Zoo");
    seed_enclosure(&pool, zoo, "Savanna");
    assert!(assignment_create(&pool, zoo, 5, 1).is_err());
}

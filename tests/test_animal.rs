//! Animal integration tests

mod common;

use app_lib::app::{
    animal_create, animal_delete, animal_list, animal_list_by_zoo, animal_list_hungry,
    assignment_create, interaction_create, AnimalCreateReq,
};
use common::{animal_req, count_rows, init_test_db, seed_enclosure, seed_worker, seed_zoo};

#[test]
fn list_all_is_empty_vec_not_error() {
    let pool = init_test_db();
    assert!(animal_list(&pool).unwrap().is_empty());
}

#[test]
fn create_stores_unfed_animal() {
    let pool = init_test_db();
    let zoo = seed_zoo(&pool, "Metro Zoo");
    let req = animal_req("Lion", "Leo", 5);
    let echoed = animal_create(&pool, zoo, req.clone()).unwrap();
    assert_eq!(echoed, req);

    let all = animal_list(&pool).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].zoo_id, zoo);
    assert_eq!(all[0].species, "Lion");
    assert_eq!(all[0].name, "Leo");
    assert_eq!(all[0].age, 5);
    assert!(all[0].last_time_food_served.is_none());
}

#[test]
fn create_in_missing_zoo_fails() {
    let pool = init_test_db();
    let err = animal_create(&pool, 77, animal_req("Lion", "Leo", 5)).unwrap_err();
    assert_eq!(err.code(), "CONSTRAINT_VIOLATION");
    assert!(err.to_string().starts_with("Error in animal_create: "));
    assert_eq!(count_rows(&pool, "animals"), 0);
}

#[test]
fn hungry_lists_only_unfed_animals_of_that_zoo() {
    let pool = init_test_db();
    let zoo = seed_zoo(&pool, "Metro Zoo");
    let other = seed_zoo(&pool, "Other Zoo");

    animal_create(&pool, zoo, animal_req("Lion", "Leo", 5)).unwrap();
    animal_create(
        &pool,
        zoo,
        AnimalCreateReq {
            last_time_food_served: Some("2024-05-01T08:00:00".to_string()),
            ..animal_req("Zebra", "Marty", 3)
        },
    )
    .unwrap();
    animal_create(&pool, other, animal_req("Bear", "Baloo", 9)).unwrap();

    let hungry = animal_list_hungry(&pool, zoo).unwrap();
    assert_eq!(hungry.len(), 1);
    assert_eq!(hungry[0].name, "Leo");

    assert_eq!(animal_list_by_zoo(&pool, zoo).unwrap().len(), 2);
    assert_eq!(animal_list(&pool).unwrap().len(), 3);
}

#[test]
fn hungry_in_unknown_zoo_is_empty() {
    let pool = init_test_db();
    assert!(animal_list_hungry(&pool, 5).unwrap().is_empty());
}

#[test]
fn delete_cascades_to_assignments_and_interactions() {
    let pool = init_test_db();
    let zoo = seed_zoo(&pool, "Metro Zoo");
    animal_create(&pool, zoo, animal_req("Lion", "Leo", 5)).unwrap();
    animal_create(&pool, zoo, animal_req("Zebra", "Marty", 3)).unwrap();
    seed_enclosure(&pool, zoo, "Savanna");
    seed_worker(&pool, zoo, "Sam");
    assignment_create(&pool, zoo, 1, 1).unwrap();
    assignment_create(&pool, zoo, 2, 1).unwrap();
    interaction_create(&pool, zoo, 1, 1).unwrap();

    animal_delete(&pool, 1).unwrap();

    let left = animal_list(&pool).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].name, "Marty");
    assert_eq!(count_rows(&pool, "animal_enclosure_assignments"), 1);
    assert_eq!(count_rows(&pool, "interactions"), 0);
    assert_eq!(count_rows(&pool, "enclosures"), 1);
}

#[test]
fn delete_missing_animal_succeeds() {
    let pool = init_test_db();
    animal_delete(&pool, 12345).unwrap();
}

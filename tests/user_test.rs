//! Admin user CRUD and PIN authentication tests.

mod common;

use campops::auth::pin;
use campops::models::user::{self, NewUser};
use common::*;

fn new_admin(name: &str, pin_hash: Option<String>, is_super_admin: bool) -> NewUser {
    NewUser {
        name: name.to_string(),
        pin_hash,
        is_super_admin,
    }
}

#[test]
fn test_create_and_find_by_name() {
    let (_dir, conn) = setup_test_db();

    let id = user::create(&conn, &new_admin("An", None, false)).unwrap();
    assert!(id > 0);

    let found = user::find_by_name(&conn, "An").unwrap().unwrap();
    assert_eq!(found.id, id);
    assert!(!found.is_super_admin);
    assert_eq!(found.pin_hash, None);
}

#[test]
fn test_duplicate_name_rejected_by_schema() {
    let (_dir, conn) = setup_test_db();
    user::create(&conn, &new_admin("An", None, false)).unwrap();
    assert!(user::create(&conn, &new_admin("An", None, false)).is_err());
}

#[test]
fn test_pin_round_trip() {
    let (_dir, conn) = setup_test_db();
    let hash = pin::hash_pin("1408").unwrap();
    user::create(&conn, &new_admin("Quân Hoàng", Some(hash), true)).unwrap();

    let found = user::find_by_name(&conn, "Quân Hoàng").unwrap().unwrap();
    let stored = found.pin_hash.unwrap();
    assert!(pin::verify_pin("1408", &stored).unwrap());
    assert!(!pin::verify_pin("0000", &stored).unwrap());
}

#[test]
fn test_pin_validation() {
    assert!(pin::validate_pin("1408").is_ok());
    assert!(pin::validate_pin("140").is_err());
    assert!(pin::validate_pin("14080").is_err());
    assert!(pin::validate_pin("14a8").is_err());
}

#[test]
fn test_update_without_pin_keeps_hash() {
    let (_dir, conn) = setup_test_db();
    let hash = pin::hash_pin("1408").unwrap();
    let id = user::create(&conn, &new_admin("An", Some(hash.clone()), false)).unwrap();

    user::update(&conn, id, "An Nguyễn", None, true).unwrap();

    let found = user::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(found.name, "An Nguyễn");
    assert!(found.is_super_admin);
    assert_eq!(found.pin_hash, Some(hash));
}

#[test]
fn test_update_with_pin_replaces_hash() {
    let (_dir, conn) = setup_test_db();
    let old_hash = pin::hash_pin("1111").unwrap();
    let id = user::create(&conn, &new_admin("An", Some(old_hash), false)).unwrap();

    let new_hash = pin::hash_pin("2222").unwrap();
    user::update(&conn, id, "An", Some(&new_hash), false).unwrap();

    let stored = user::find_by_id(&conn, id).unwrap().unwrap().pin_hash.unwrap();
    assert!(pin::verify_pin("2222", &stored).unwrap());
    assert!(!pin::verify_pin("1111", &stored).unwrap());
}

#[test]
fn test_list_sorted_by_name() {
    let (_dir, conn) = setup_test_db();
    user::create(&conn, &new_admin("Châu", None, false)).unwrap();
    user::create(&conn, &new_admin("An", None, false)).unwrap();

    let listed = user::list(&conn).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "An");
}

#[test]
fn test_delete_removes_admin() {
    let (_dir, conn) = setup_test_db();
    let id = user::create(&conn, &new_admin("An", None, false)).unwrap();
    assert_eq!(user::delete(&conn, id).unwrap(), 1);
    assert!(user::find_by_id(&conn, id).unwrap().is_none());
}

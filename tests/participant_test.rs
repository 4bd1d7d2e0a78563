//! Participant CRUD and check-in lifecycle tests.

mod common;

use campops::models::camp::Role;
use campops::models::participant;
use common::*;

#[test]
fn test_create_and_find() {
    let (_dir, conn) = setup_test_db();

    let id = participant::create(&conn, "Minh", Role::Leader).unwrap();
    let found = participant::find_by_id(&conn, id).unwrap().unwrap();

    assert_eq!(found.name, "Minh");
    assert_eq!(found.role, Role::Leader);
    assert!(!found.checked_in);
    assert_eq!(found.check_in_photo, None);
}

#[test]
fn test_list_in_insertion_order() {
    let (_dir, conn) = setup_test_db();
    participant::create(&conn, "B", Role::Leader).unwrap();
    participant::create(&conn, "A", Role::Supporter).unwrap();

    let listed = participant::list(&conn).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "B");
    assert_eq!(listed[1].name, "A");
}

#[test]
fn test_check_in_records_admin_and_photo() {
    let (_dir, conn) = setup_test_db();
    let admin = insert_admin(&conn, "An");
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();

    participant::check_in(
        &conn,
        id,
        "2026-08-25T08:00:00Z",
        Some("/photos/minh.jpg"),
        Some(admin),
    )
    .unwrap();

    let found = participant::find_by_id(&conn, id).unwrap().unwrap();
    assert!(found.checked_in);
    assert_eq!(found.check_in_time.as_deref(), Some("2026-08-25T08:00:00Z"));
    assert_eq!(found.check_in_photo.as_deref(), Some("/photos/minh.jpg"));
    assert_eq!(found.checked_in_by, Some(admin));
    assert_eq!(found.checked_in_by_name.as_deref(), Some("An"));
}

#[test]
fn test_reset_clears_every_check_in_field() {
    let (_dir, conn) = setup_test_db();
    let admin = insert_admin(&conn, "An");
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();
    participant::check_in(&conn, id, "2026-08-25T08:00:00Z", Some("/photos/x.jpg"), Some(admin))
        .unwrap();

    participant::reset_check_in(&conn, id).unwrap();

    let found = participant::find_by_id(&conn, id).unwrap().unwrap();
    assert!(!found.checked_in);
    assert_eq!(found.check_in_time, None);
    assert_eq!(found.check_in_photo, None);
    assert_eq!(found.checked_in_by, None);
}

#[test]
fn test_deleting_admin_keeps_participant_check_in() {
    let (_dir, conn) = setup_test_db();
    let admin = insert_admin(&conn, "An");
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();
    participant::check_in(&conn, id, "2026-08-25T08:00:00Z", None, Some(admin)).unwrap();

    conn.execute("DELETE FROM users WHERE id = ?1", [admin])
        .unwrap();

    // checked_in_by goes NULL, the check-in itself stays.
    let found = participant::find_by_id(&conn, id).unwrap().unwrap();
    assert!(found.checked_in);
    assert_eq!(found.checked_in_by, None);
    assert_eq!(found.checked_in_by_name, None);
}

#[test]
fn test_update_changes_name_and_role() {
    let (_dir, mut conn) = setup_test_db();
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();

    participant::update(&mut conn, id, "Minh Anh", Role::Leader).unwrap();

    let found = participant::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(found.name, "Minh Anh");
    assert_eq!(found.role, Role::Leader);
}

#[test]
fn test_role_change_drops_assignment_in_same_commit() {
    let (_dir, mut conn) = setup_test_db();
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();
    conn.execute(
        "INSERT INTO camp_assignments (participant_id, camp, slot_group, position) \
         VALUES (?1, 'camp1', 'supporter', 0)",
        [id],
    )
    .unwrap();

    participant::update(&mut conn, id, "Minh", Role::Leader).unwrap();

    let found = participant::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(found.role, Role::Leader);
    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM camp_assignments WHERE participant_id = ?1",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn test_update_without_role_change_keeps_assignment() {
    let (_dir, mut conn) = setup_test_db();
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();
    conn.execute(
        "INSERT INTO camp_assignments (participant_id, camp, slot_group, position) \
         VALUES (?1, 'camp1', 'supporter', 0)",
        [id],
    )
    .unwrap();

    participant::update(&mut conn, id, "Minh Anh", Role::Supporter).unwrap();

    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM camp_assignments WHERE participant_id = ?1",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_delete_removes_record() {
    let (_dir, conn) = setup_test_db();
    let id = participant::create(&conn, "Minh", Role::Supporter).unwrap();

    assert_eq!(participant::delete(&conn, id).unwrap(), 1);
    assert!(participant::find_by_id(&conn, id).unwrap().is_none());
}

//! Shared test infrastructure for model layer tests.
//!
//! `setup_test_db()` gives a temporary SQLite database with the schema
//! applied; the `TempDir` must be kept alive for the connection to stay
//! valid. Seed helpers insert the rows most suites need.

use rusqlite::{Connection, params};

use campops::db::MIGRATIONS;
use campops::models::camp::Role;
use tempfile::TempDir;

pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

#[allow(dead_code)]
pub fn insert_admin(conn: &Connection, name: &str) -> i64 {
    conn.execute(
        "INSERT INTO users (name, is_super_admin) VALUES (?1, 0)",
        params![name],
    )
    .expect("Failed to insert admin");
    conn.last_insert_rowid()
}

#[allow(dead_code)]
pub fn insert_participant(conn: &Connection, name: &str, role: Role) -> i64 {
    conn.execute(
        "INSERT INTO participants (name, role) VALUES (?1, ?2)",
        params![name, role.as_str()],
    )
    .expect("Failed to insert participant");
    conn.last_insert_rowid()
}

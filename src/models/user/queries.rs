use rusqlite::{Connection, OptionalExtension, params};

use super::types::{NewUser, User};

const SELECT_USER: &str = "\
    SELECT id, name, pin_hash, is_super_admin, created_at, updated_at FROM users";

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
        pin_hash: row.get("pin_hash")?,
        is_super_admin: row.get::<_, i64>("is_super_admin")? != 0,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<User>> {
    let mut stmt = conn.prepare(&format!("{SELECT_USER} ORDER BY name"))?;
    let users = stmt
        .query_map([], row_to_user)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(users)
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<User>> {
    conn.query_row(&format!("{SELECT_USER} WHERE id = ?1"), params![id], row_to_user)
        .optional()
}

pub fn find_by_name(conn: &Connection, name: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        &format!("{SELECT_USER} WHERE name = ?1"),
        params![name],
        row_to_user,
    )
    .optional()
}

pub fn create(conn: &Connection, new_user: &NewUser) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO users (name, pin_hash, is_super_admin) VALUES (?1, ?2, ?3)",
        params![
            new_user.name,
            new_user.pin_hash,
            new_user.is_super_admin as i64
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an admin. `pin_hash = None` keeps the stored hash.
pub fn update(
    conn: &Connection,
    id: i64,
    name: &str,
    pin_hash: Option<&str>,
    is_super_admin: bool,
) -> rusqlite::Result<()> {
    match pin_hash {
        Some(hash) => conn.execute(
            "UPDATE users SET name = ?1, pin_hash = ?2, is_super_admin = ?3, \
             updated_at = CURRENT_TIMESTAMP WHERE id = ?4",
            params![name, hash, is_super_admin as i64, id],
        )?,
        None => conn.execute(
            "UPDATE users SET name = ?1, is_super_admin = ?2, \
             updated_at = CURRENT_TIMESTAMP WHERE id = ?3",
            params![name, is_super_admin as i64, id],
        )?,
    };
    Ok(())
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM users WHERE id = ?1", params![id])
}

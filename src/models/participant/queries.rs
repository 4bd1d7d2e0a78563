use rusqlite::{Connection, OptionalExtension, params};

use super::types::Participant;
use crate::models::camp::Role;

const SELECT_PARTICIPANT: &str = "\
    SELECT p.id, p.name, p.role, p.checked_in, p.check_in_time, p.check_in_photo, \
           p.checked_in_by, u.name AS checked_in_by_name, p.created_at, p.updated_at \
    FROM participants p \
    LEFT JOIN users u ON p.checked_in_by = u.id";

fn row_to_participant(row: &rusqlite::Row) -> rusqlite::Result<Participant> {
    let role_str: String = row.get("role")?;
    let role = Role::parse(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("bad role '{role_str}'").into(),
        )
    })?;
    Ok(Participant {
        id: row.get("id")?,
        name: row.get("name")?,
        role,
        checked_in: row.get::<_, i64>("checked_in")? != 0,
        check_in_time: row.get("check_in_time")?,
        check_in_photo: row.get("check_in_photo")?,
        checked_in_by: row.get("checked_in_by")?,
        checked_in_by_name: row.get("checked_in_by_name")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Participant>> {
    let mut stmt = conn.prepare(&format!("{SELECT_PARTICIPANT} ORDER BY p.id"))?;
    let participants = stmt
        .query_map([], row_to_participant)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(participants)
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Participant>> {
    conn.query_row(
        &format!("{SELECT_PARTICIPANT} WHERE p.id = ?1"),
        params![id],
        row_to_participant,
    )
    .optional()
}

pub fn create(conn: &Connection, name: &str, role: Role) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO participants (name, role) VALUES (?1, ?2)",
        params![name, role.as_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update name/role. A role change makes any camp placement invalid, so the
/// assignment row goes in the same commit — the store never holds a
/// placement whose slot group the new role does not admit.
pub fn update(conn: &mut Connection, id: i64, name: &str, role: Role) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    tx.execute(
        "DELETE FROM camp_assignments WHERE participant_id = ?1 AND slot_group != ?2",
        params![id, role.as_str()],
    )?;
    tx.execute(
        "UPDATE participants SET name = ?1, role = ?2, updated_at = CURRENT_TIMESTAMP \
         WHERE id = ?3",
        params![name, role.as_str(), id],
    )?;
    tx.commit()
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM participants WHERE id = ?1", params![id])
}

pub fn check_in(
    conn: &Connection,
    id: i64,
    time: &str,
    photo: Option<&str>,
    by: Option<i64>,
) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE participants SET checked_in = 1, check_in_time = ?1, check_in_photo = ?2, \
         checked_in_by = ?3, updated_at = CURRENT_TIMESTAMP WHERE id = ?4",
        params![time, photo, by, id],
    )?;
    Ok(())
}

/// Clear check-in state entirely, photo reference included.
pub fn reset_check_in(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE participants SET checked_in = 0, check_in_time = NULL, \
         check_in_photo = NULL, checked_in_by = NULL, updated_at = CURRENT_TIMESTAMP \
         WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

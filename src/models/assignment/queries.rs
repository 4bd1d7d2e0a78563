use rusqlite::{Connection, params};

use super::board::{AssignmentBoard, MoveOutcome};
use super::types::{AssignmentDisplay, StoredAssignment};
use crate::models::camp::{Camp, Role, SlotGroup};

pub fn load_rows(conn: &Connection) -> rusqlite::Result<Vec<StoredAssignment>> {
    let mut stmt = conn.prepare(
        "SELECT participant_id, camp, slot_group, position FROM camp_assignments",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StoredAssignment {
                participant_id: row.get("participant_id")?,
                camp: row.get("camp")?,
                slot_group: row.get("slot_group")?,
                position: row.get("position")?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn list_with_participants(conn: &Connection) -> rusqlite::Result<Vec<AssignmentDisplay>> {
    let mut stmt = conn.prepare(
        "SELECT a.participant_id, p.name, p.role, a.camp, a.slot_group, a.position, a.updated_at \
         FROM camp_assignments a \
         JOIN participants p ON a.participant_id = p.id \
         ORDER BY a.camp, a.slot_group, a.position",
    )?;
    let mut displays = Vec::new();
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>("participant_id")?,
            row.get::<_, String>("name")?,
            row.get::<_, String>("role")?,
            row.get::<_, String>("camp")?,
            row.get::<_, String>("slot_group")?,
            row.get::<_, i64>("position")?,
            row.get::<_, String>("updated_at")?,
        ))
    })?;
    for row in rows {
        let (participant_id, name, role, camp, slot_group, position, updated_at) = row?;
        // Rows with stale identifiers are filtered out, matching the
        // console's treatment of malformed assignment data.
        let (Some(role), Some(camp_id), Some(group), Ok(position)) = (
            Role::parse(&role),
            Camp::parse(&camp),
            SlotGroup::parse(&slot_group),
            usize::try_from(position),
        ) else {
            log::warn!("Skipping malformed assignment row for participant {participant_id}");
            continue;
        };
        displays.push(AssignmentDisplay {
            participant_id,
            participant_name: name,
            role,
            camp_id,
            slot_group: group,
            position,
            updated_at,
        });
    }
    Ok(displays)
}

/// Build the board from participants + stored assignments. Rows that no
/// longer parse, reference a missing participant, or sit in a slot group the
/// participant's role does not admit are dropped; overflow or
/// colliding positions are compacted and the fixes written back, so the
/// board starts with its invariants holding.
pub fn load_board(conn: &mut Connection) -> rusqlite::Result<AssignmentBoard> {
    let mut board = AssignmentBoard::new();

    {
        let mut stmt = conn.prepare("SELECT id, role FROM participants")?;
        let participants = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>("id")?, row.get::<_, String>("role")?))
        })?;
        for row in participants {
            let (id, role) = row?;
            if let Some(role) = Role::parse(&role) {
                board.set_participant(id, role);
            }
        }
    }

    for stored in load_rows(conn)? {
        let role = board.role(stored.participant_id);
        match (stored.placement(), role) {
            (Some(placement), Some(role)) if placement.group.admits(role) => {
                board.seed_placement(stored.participant_id, placement);
            }
            _ => {
                log::warn!(
                    "Dropping unusable assignment row for participant {}",
                    stored.participant_id
                );
                conn.execute(
                    "DELETE FROM camp_assignments WHERE participant_id = ?1",
                    params![stored.participant_id],
                )?;
            }
        }
    }

    let repaired = board.normalize();
    if !repaired.is_empty() {
        log::info!("Compacted {} out-of-range assignment positions", repaired.len());
        let outcome = MoveOutcome {
            changed: repaired,
            removed: None,
        };
        persist_outcome(conn, &outcome)?;
    }

    Ok(board)
}

/// Write a planned outcome in one transaction: the deleted row (if any) plus
/// every placement the renumbering touched, as a batch. The caller applies
/// the outcome to the in-memory board only after this commits.
pub fn persist_outcome(conn: &mut Connection, outcome: &MoveOutcome) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    if let Some(id) = outcome.removed {
        tx.execute(
            "DELETE FROM camp_assignments WHERE participant_id = ?1",
            params![id],
        )?;
    }
    for (id, placement) in &outcome.changed {
        tx.execute(
            "INSERT INTO camp_assignments (participant_id, camp, slot_group, position) \
             VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT(participant_id) DO UPDATE SET \
                 camp = excluded.camp, \
                 slot_group = excluded.slot_group, \
                 position = excluded.position, \
                 updated_at = CURRENT_TIMESTAMP",
            params![
                id,
                placement.camp.as_str(),
                placement.group.as_str(),
                placement.position as i64
            ],
        )?;
    }
    tx.commit()
}

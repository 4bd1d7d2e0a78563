use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::{HttpResponse, web};

use super::lock_board;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::assignment;
use crate::models::assignment::board::{AssignmentBoard, Destination, MoveOutcome};
use crate::models::assignment::types::{
    BoardView, CampView, MoveRequest, MoveResponse, ReorderItem, SeatView,
};
use crate::models::camp::{Camp, Role, SlotGroup};
use crate::models::participant;

/// GET /api/camp-assignments
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let assignments = assignment::list_with_participants(&conn)?;
    Ok(HttpResponse::Ok().json(assignments))
}

/// POST /api/camp-assignments - Move a participant to a seat, or (with a null
/// camp) back to the unassigned pool. Plan, persist, then apply: a failed
/// write leaves both the store and the board at the pre-move state.
pub async fn upsert(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
    body: web::Json<MoveRequest>,
) -> Result<HttpResponse, AppError> {
    let dest = match (body.camp_id, body.slot_group, body.position) {
        (None, _, _) => Destination::Unassigned,
        (Some(camp), Some(group), Some(position)) => Destination::Seat {
            camp,
            group,
            position,
        },
        _ => {
            return Err(AppError::Validation(
                "slotGroup and position are required when campId is set".to_string(),
            ));
        }
    };

    let mut conn = pool.get()?;
    let mut board = lock_board(&board);
    let outcome = board.plan_move(body.participant_id, dest)?;
    commit(&mut conn, &mut board, &outcome)?;
    Ok(HttpResponse::Ok().json(MoveResponse::from_outcome(&outcome)))
}

/// DELETE /api/camp-assignments/{participantId}
pub async fn unassign(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let participant_id = path.into_inner();
    let mut conn = pool.get()?;
    let mut board = lock_board(&board);
    let outcome = board.plan_move(participant_id, Destination::Unassigned)?;
    commit(&mut conn, &mut board, &outcome)?;
    Ok(HttpResponse::Ok().json(MoveResponse::from_outcome(&outcome)))
}

/// POST /api/camp-assignments/reorder - Batch position update within the
/// participants' current slot groups. All-or-nothing.
pub async fn reorder(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
    body: web::Json<Vec<ReorderItem>>,
) -> Result<HttpResponse, AppError> {
    let items: Vec<(i64, usize)> = body
        .iter()
        .map(|item| (item.participant_id, item.position))
        .collect();

    let mut conn = pool.get()?;
    let mut board = lock_board(&board);
    let outcome = board.plan_reorder(&items)?;
    commit(&mut conn, &mut board, &outcome)?;
    Ok(HttpResponse::Ok().json(MoveResponse::from_outcome(&outcome)))
}

/// GET /api/camp-assignments/board - The rendering contract: per camp and
/// slot group, a capacity-length row of seats, occupied or explicitly empty,
/// plus the unassigned pools.
pub async fn board_view(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let names: HashMap<i64, String> = participant::list(&conn)?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    let board = lock_board(&board);
    let seat = |id: i64| -> Option<SeatView> {
        names.get(&id).map(|name| SeatView {
            participant_id: id,
            name: name.clone(),
        })
    };
    let row = |camp: Camp, group: SlotGroup| -> Vec<Option<SeatView>> {
        board
            .grid(camp, group)
            .into_iter()
            .map(|cell| cell.and_then(seat))
            .collect()
    };
    let pool_of = |role: Role| -> Vec<SeatView> {
        board.unassigned(role).into_iter().filter_map(seat).collect()
    };

    let view = BoardView {
        camps: Camp::ALL
            .into_iter()
            .map(|camp| CampView {
                camp_id: camp,
                label: camp.label(),
                leaders: row(camp, SlotGroup::Leader),
                supporters: row(camp, SlotGroup::Supporter),
            })
            .collect(),
        unassigned_leaders: pool_of(Role::Leader),
        unassigned_supporters: pool_of(Role::Supporter),
    };
    Ok(HttpResponse::Ok().json(view))
}

fn commit(
    conn: &mut rusqlite::Connection,
    board: &mut AssignmentBoard,
    outcome: &MoveOutcome,
) -> Result<(), AppError> {
    if outcome.is_noop() {
        return Ok(());
    }
    assignment::persist_outcome(conn, outcome)?;
    board.apply(outcome);
    Ok(())
}

use std::sync::Mutex;

use actix_web::{HttpResponse, web};
use chrono::Utc;

use super::lock_board;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::assignment::board::AssignmentBoard;
use crate::models::participant::{self, CheckInRequest, ParticipantRequest};
use crate::models::user;

/// GET /api/participants
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let participants = participant::list(&conn)?;
    Ok(HttpResponse::Ok().json(participants))
}

/// POST /api/participants
pub async fn create(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
    body: web::Json<ParticipantRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let conn = pool.get()?;
    let created_id = participant::create(&conn, body.name.trim(), body.role)?;
    lock_board(&board).set_participant(created_id, body.role);

    let created = participant::find_by_id(&conn, created_id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/participants/{id} - Update name/role. The store-side update is
/// one transaction (a role change deletes the assignment row with it); the
/// board is touched only after it commits.
pub async fn update(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
    path: web::Path<i64>,
    body: web::Json<ParticipantRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let participant_id = path.into_inner();
    let mut conn = pool.get()?;
    participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;

    {
        let mut board = lock_board(&board);
        participant::update(&mut conn, participant_id, body.name.trim(), body.role)?;
        board.set_participant(participant_id, body.role);
    }

    let updated = participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/participants/{id} - The assignment row goes with it (cascade).
pub async fn delete(
    pool: web::Data<DbPool>,
    board: web::Data<Mutex<AssignmentBoard>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let participant_id = path.into_inner();
    let conn = pool.get()?;
    participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;

    {
        let mut board = lock_board(&board);
        participant::delete(&conn, participant_id)?;
        board.remove_participant(participant_id);
    }
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/participants/{id}/checkin
pub async fn check_in(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<CheckInRequest>,
) -> Result<HttpResponse, AppError> {
    let participant_id = path.into_inner();
    let conn = pool.get()?;
    participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;

    if let Some(admin_id) = body.checked_in_by {
        if user::find_by_id(&conn, admin_id)?.is_none() {
            return Err(AppError::Validation(format!("Unknown admin {admin_id}")));
        }
    }

    let time = body
        .check_in_time
        .clone()
        .unwrap_or_else(|| Utc::now().to_rfc3339());
    participant::check_in(
        &conn,
        participant_id,
        &time,
        body.check_in_photo.as_deref(),
        body.checked_in_by,
    )?;

    let updated = participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;
    log::info!("Checked in participant '{}'", updated.name);
    Ok(HttpResponse::Ok().json(updated))
}

/// PUT /api/participants/{id}/reset-checkin
pub async fn reset_check_in(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let participant_id = path.into_inner();
    let conn = pool.get()?;
    participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;

    participant::reset_check_in(&conn, participant_id)?;
    let updated = participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(updated))
}

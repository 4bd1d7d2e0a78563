use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::camp::Role;
use crate::models::evaluation::{self, EvaluationRequest, criteria};
use crate::models::participant;
use crate::models::user;

/// GET /api/evaluations/{participantId}
pub async fn list_for_participant(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let participant_id = path.into_inner();
    let conn = pool.get()?;
    participant::find_by_id(&conn, participant_id)?.ok_or(AppError::NotFound)?;

    let evaluations = evaluation::list_for_participant(&conn, participant_id)?;
    Ok(HttpResponse::Ok().json(evaluations))
}

/// POST /api/evaluations - Store a rubric pass. Criteria without evidence are
/// dropped; a submission with no evidence at all is rejected.
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<EvaluationRequest>,
) -> Result<HttpResponse, AppError> {
    let mut conn = pool.get()?;
    participant::find_by_id(&conn, body.participant_id)?.ok_or(AppError::NotFound)?;
    if let Some(evaluator_id) = body.evaluator_id {
        if user::find_by_id(&conn, evaluator_id)?.is_none() {
            return Err(AppError::Validation(format!("Unknown admin {evaluator_id}")));
        }
    }

    evaluation::create(&mut conn, body.participant_id, body.evaluator_id, &body.criteria)?;

    let evaluations = evaluation::list_for_participant(&conn, body.participant_id)?;
    Ok(HttpResponse::Created().json(evaluations))
}

/// GET /api/criteria/{role} - The fixed rubric for a role.
pub async fn criteria_for_role(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let role = Role::parse(&path.into_inner())
        .ok_or_else(|| AppError::Validation("Role must be 'leader' or 'supporter'".to_string()))?;
    Ok(HttpResponse::Ok().json(criteria::criteria_for(role)))
}

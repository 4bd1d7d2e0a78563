use actix_web::{HttpResponse, web};

use crate::auth::pin;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::user::{self, AuthRequest, NewUser, UserDisplay, UserRequest};

/// GET /api/users - List admins
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let users: Vec<UserDisplay> = user::list(&conn)?.into_iter().map(UserDisplay::from).collect();
    Ok(HttpResponse::Ok().json(users))
}

fn hash_request_pin(request_pin: &Option<String>) -> Result<Option<String>, AppError> {
    match request_pin {
        Some(p) => {
            pin::validate_pin(p).map_err(AppError::Validation)?;
            let hash = pin::hash_pin(p).map_err(AppError::Hash)?;
            Ok(Some(hash))
        }
        None => Ok(None),
    }
}

/// POST /api/users - Create admin
pub async fn create(
    pool: web::Data<DbPool>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let conn = pool.get()?;
    if user::find_by_name(&conn, body.name.trim())?.is_some() {
        return Err(AppError::Validation(format!(
            "An admin named '{}' already exists",
            body.name.trim()
        )));
    }

    let new_user = NewUser {
        name: body.name.trim().to_string(),
        pin_hash: hash_request_pin(&body.pin)?,
        is_super_admin: body.is_super_admin,
    };
    let created_id = user::create(&conn, &new_user)?;

    let created = user::find_by_id(&conn, created_id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Created().json(UserDisplay::from(created)))
}

/// PUT /api/users/{id} - Update admin. Absent `pin` keeps the stored one.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let user_id = path.into_inner();
    let conn = pool.get()?;
    user::find_by_id(&conn, user_id)?.ok_or(AppError::NotFound)?;

    let pin_hash = hash_request_pin(&body.pin)?;
    user::update(
        &conn,
        user_id,
        body.name.trim(),
        pin_hash.as_deref(),
        body.is_super_admin,
    )?;

    let updated = user::find_by_id(&conn, user_id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(UserDisplay::from(updated)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let conn = pool.get()?;
    user::find_by_id(&conn, user_id)?.ok_or(AppError::NotFound)?;
    user::delete(&conn, user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/users/auth - Verify an admin's 4-digit PIN.
pub async fn auth(
    pool: web::Data<DbPool>,
    body: web::Json<AuthRequest>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let found = user::find_by_name(&conn, &body.name)?.ok_or(AppError::Unauthorized)?;

    let hash = found.pin_hash.as_deref().ok_or(AppError::Unauthorized)?;
    let ok = pin::verify_pin(&body.pin, hash).map_err(AppError::Hash)?;
    if !ok {
        log::info!("Failed PIN attempt for admin '{}'", found.name);
        return Err(AppError::Unauthorized);
    }

    Ok(HttpResponse::Ok().json(UserDisplay::from(found)))
}

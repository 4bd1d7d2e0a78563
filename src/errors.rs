use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::assignment::board::MoveError;

#[derive(Debug)]
pub enum AppError {
    Db(rusqlite::Error),
    Pool(r2d2::Error),
    Io(std::io::Error),
    Hash(String),
    Validation(String),
    Move(MoveError),
    Unauthorized,
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Pool(e) => write!(f, "Pool error: {e}"),
            AppError::Io(e) => write!(f, "IO error: {e}"),
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::Validation(e) => write!(f, "{e}"),
            AppError::Move(e) => write!(f, "{e}"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

fn json_error(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().json(json_error("Not found")),
            AppError::Unauthorized => {
                HttpResponse::Unauthorized().json(json_error("Unauthorized"))
            }
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json_error(msg)),
            // Rejected moves are conflicts with current board state, except a
            // move of a participant the board has never seen.
            AppError::Move(MoveError::UnknownParticipant(_)) => {
                HttpResponse::NotFound().json(json_error(&self.to_string()))
            }
            AppError::Move(e) => HttpResponse::Conflict().json(json_error(&e.to_string())),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(json_error("Internal Server Error"))
            }
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Pool(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<MoveError> for AppError {
    fn from(e: MoveError) -> Self {
        AppError::Move(e)
    }
}

use serde::{Deserialize, Serialize};

use crate::models::camp::Role;

/// Participant as listed by the API. Check-in fields stay empty until the
/// check-in mutation runs; `checked_in_by_name` is joined from the admin who
/// performed it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub checked_in: bool,
    pub check_in_time: Option<String>,
    pub check_in_photo: Option<String>,
    pub checked_in_by: Option<i64>,
    pub checked_in_by_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update request body.
#[derive(Debug, Deserialize)]
pub struct ParticipantRequest {
    pub name: String,
    pub role: Role,
}

/// Check-in request. Time defaults to "now" server-side when absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub check_in_time: Option<String>,
    pub check_in_photo: Option<String>,
    pub checked_in_by: Option<i64>,
}

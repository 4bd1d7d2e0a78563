use serde::{Deserialize, Serialize};

/// Internal admin record — includes the PIN hash, never serialized.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub pin_hash: Option<String>,
    pub is_super_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Safe shape for API responses — no PIN hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDisplay {
    pub id: i64,
    pub name: String,
    pub is_super_admin: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserDisplay {
    fn from(u: User) -> Self {
        UserDisplay {
            id: u.id,
            name: u.name,
            is_super_admin: u.is_super_admin,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

pub struct NewUser {
    pub name: String,
    pub pin_hash: Option<String>,
    pub is_super_admin: bool,
}

/// Create/update request body. A missing `pin` on update keeps the old one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub name: String,
    pub pin: Option<String>,
    #[serde(default)]
    pub is_super_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub name: String,
    pub pin: String,
}

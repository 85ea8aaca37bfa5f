//! Role Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

/// Role assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
}

/// Create role assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleCreate {
    pub user_id: Uuid,
    pub role: Role,
}

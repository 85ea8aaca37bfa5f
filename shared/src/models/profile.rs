//! Customer Profile Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer profile, keyed by the auth user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

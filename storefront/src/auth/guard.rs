//! Session guards

use super::{AdminSession, Session};
use crate::store::{Query, Repository};
use shared::error::{AppError, AppResult};
use shared::models::{Role, UserRole};

/// Require a signed-in user
pub fn require_session(session: Option<&Session>) -> AppResult<&Session> {
    session.ok_or_else(|| {
        tracing::debug!("Rejected request without a session");
        AppError::not_authenticated()
    })
}

/// Whether the user holds the admin role
pub async fn is_admin(repo: &Repository, session: &Session) -> AppResult<bool> {
    let query = Query::new()
        .eq("user_id", session.user_id.to_string())
        .eq("role", Role::Admin.as_str());
    Ok(repo.find::<UserRole>(&query).await?.is_some())
}

/// Require a signed-in user with the admin role
pub async fn require_admin(
    repo: &Repository,
    session: Option<&Session>,
) -> AppResult<AdminSession> {
    let session = require_session(session)?;
    if !is_admin(repo, session).await? {
        tracing::warn!(user_id = %session.user_id, "Admin access denied");
        return Err(AppError::admin_required());
    }
    Ok(AdminSession::new(session.clone()))
}

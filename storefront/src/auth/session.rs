//! Session value
//!
//! The signed-in user, passed explicitly into every handler that needs to
//! know who is acting. Token issuance and refresh belong to the hosted
//! backend.

use uuid::Uuid;

/// Authenticated user session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
    /// Bearer token for the backend, when the session came from it; see
    /// [`Config::backend_repository`](crate::Config::backend_repository)
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            email: None,
            access_token: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

/// Session whose user holds the admin role
///
/// Only [`require_admin`](super::require_admin) creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    session: Session,
}

impl AdminSession {
    pub(super) fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user_id(&self) -> Uuid {
        self.session.user_id
    }
}

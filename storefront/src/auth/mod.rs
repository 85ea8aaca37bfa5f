//! Sessions and access guards

mod guard;
mod session;

pub use guard::{is_admin, require_admin, require_session};
pub use session::{AdminSession, Session};

//! Customer profile: past orders

use crate::auth::{Session, require_session};
use crate::store::{Direction, Query, Repository};
use shared::error::AppResult;
use shared::models::Order;

/// The signed-in user's orders, newest first
pub async fn order_history(repo: &Repository, session: Option<&Session>) -> AppResult<Vec<Order>> {
    let session = require_session(session)?;
    let query = Query::new()
        .eq("user_id", session.user_id.to_string())
        .order_by("created_at", Direction::Desc);
    let orders = repo.list(&query).await?;
    tracing::debug!(user_id = %session.user_id, count = orders.len(), "Loaded order history");
    Ok(orders)
}

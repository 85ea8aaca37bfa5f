//! Message Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message sent by an administrator to a customer about an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub order_id: Uuid,
    /// Recipient
    pub user_id: Uuid,
    pub message: String,
    /// Administrator who sent it
    pub sent_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Create message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreate {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub sent_by: Option<Uuid>,
}

//! Change notification types

use super::Table;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Kind of row change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// A single row change on a table
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub table: Table,
    pub kind: ChangeKind,
    /// Row after the change (before it, for deletes)
    pub row: Value,
}

/// Callback invoked for every change on a subscribed table
pub type ChangeCallback = Box<dyn Fn(ChangeEvent) + Send + Sync + 'static>;

/// Source of row change notifications
pub trait ChangeFeed: Send + Sync {
    /// Deliver every change on `table` to `callback` until the returned
    /// subscription is cancelled or dropped.
    fn subscribe(&self, table: Table, callback: ChangeCallback) -> Subscription;
}

/// Handle to an active subscription; dropping it stops delivery
#[derive(Debug)]
pub struct Subscription {
    token: CancellationToken,
}

impl Subscription {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Stop delivering changes
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

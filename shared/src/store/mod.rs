//! Data access abstraction over the hosted backend
//!
//! Rows travel as JSON objects. [`DataStore`] covers select/insert/update/
//! delete, [`ChangeFeed`] covers realtime change notifications, and
//! [`Record`] binds each model to its table so callers can work with typed
//! rows.

mod error;
mod feed;
mod query;

pub use error::{StoreError, StoreResult};
pub use feed::{ChangeCallback, ChangeEvent, ChangeFeed, ChangeKind, Subscription};
pub use query::{Direction, Filter, OrderBy, Query, Table, compare_values};

use crate::error::ErrorCode;
use crate::models::{
    Category, MenuItem, Message, Order, OrderItem, PricingRule, Profile, UserRole,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Row storage backend
///
/// Inserts return the stored rows, including backend-generated `id` and
/// `created_at` columns.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn select(&self, table: Table, query: &Query) -> StoreResult<Vec<Value>>;

    async fn insert(&self, table: Table, rows: Vec<Value>) -> StoreResult<Vec<Value>>;

    /// Merge `patch` into every row matching `query`, returning the updated rows
    async fn update(&self, table: Table, query: &Query, patch: Value) -> StoreResult<Vec<Value>>;

    /// Delete every row matching `query`, returning how many were removed
    async fn delete(&self, table: Table, query: &Query) -> StoreResult<u64>;
}

/// A model stored in a backend table
pub trait Record: DeserializeOwned + Send {
    const TABLE: Table;
    /// Name used in error messages
    const NAME: &'static str;
    /// Code reported when a row is missing
    const NOT_FOUND: ErrorCode = ErrorCode::NotFound;
}

impl Record for Category {
    const TABLE: Table = Table::Categories;
    const NAME: &'static str = "Category";
    const NOT_FOUND: ErrorCode = ErrorCode::CategoryNotFound;
}

impl Record for MenuItem {
    const TABLE: Table = Table::MenuItems;
    const NAME: &'static str = "Menu item";
    const NOT_FOUND: ErrorCode = ErrorCode::MenuItemNotFound;
}

impl Record for PricingRule {
    const TABLE: Table = Table::PricingRules;
    const NAME: &'static str = "Pricing rule";
    const NOT_FOUND: ErrorCode = ErrorCode::PricingRuleNotFound;
}

impl Record for Order {
    const TABLE: Table = Table::Orders;
    const NAME: &'static str = "Order";
    const NOT_FOUND: ErrorCode = ErrorCode::OrderNotFound;
}

impl Record for OrderItem {
    const TABLE: Table = Table::OrderItems;
    const NAME: &'static str = "Order item";
    const NOT_FOUND: ErrorCode = ErrorCode::OrderItemNotFound;
}

impl Record for Message {
    const TABLE: Table = Table::Messages;
    const NAME: &'static str = "Message";
}

impl Record for Profile {
    const TABLE: Table = Table::Profiles;
    const NAME: &'static str = "Profile";
}

impl Record for UserRole {
    const TABLE: Table = Table::UserRoles;
    const NAME: &'static str = "User role";
}

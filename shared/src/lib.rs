//! Shared types for the campus storefront
//!
//! Data models for the hosted backend tables, the data access abstraction
//! over those tables, and the unified error types used by the storefront
//! library and the REST adapter.

pub mod error;
pub mod models;
pub mod store;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
pub use store::{ChangeFeed, DataStore, Query, Record, Table};

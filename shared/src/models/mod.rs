//! Data models
//!
//! Row types of the hosted backend tables, shared between the storefront
//! library and the REST adapter. All IDs are UUIDs and all money values are
//! `rust_decimal::Decimal`.

pub mod category;
pub mod menu_item;
pub mod message;
pub mod order;
pub mod pricing_rule;
pub mod profile;
pub mod role;

// Re-exports
pub use category::*;
pub use menu_item::*;
pub use message::*;
pub use order::*;
pub use pricing_rule::*;
pub use profile::*;
pub use role::*;

//! Data access
//!
//! The store traits and query types live in `shared::store`; this module
//! adds the in-memory store and the typed repository used by every
//! storefront flow.

mod memory;
mod repository;

pub use memory::MemoryStore;
pub use repository::Repository;
pub use shared::store::{
    ChangeCallback, ChangeEvent, ChangeFeed, ChangeKind, DataStore, Direction, Query, Record,
    StoreError, StoreResult, Subscription, Table,
};

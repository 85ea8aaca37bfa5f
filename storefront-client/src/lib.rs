//! Storefront Client - REST adapter for the hosted backend
//!
//! Implements [`shared::store::DataStore`] over the backend's row API
//! (`/rest/v1/{table}`), so the storefront can run against the hosted
//! tables instead of the in-memory store.

pub mod config;
pub mod error;
pub mod rest;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use rest::RestStore;

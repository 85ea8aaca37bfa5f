//! Time-of-day Pricing
//!
//! Pricing rules override a menu item's base price during one window of the
//! day, either with a fixed price or a multiplier. Everything here is pure:
//! no I/O, no shared state, safe to call once per item per render.

pub mod resolver;
pub mod window;

pub use resolver::*;
pub use window::*;

//! Utilities: logging, money, form validation

pub mod logger;
pub mod money;
pub mod validation;

pub use money::{format_inr, round_money};
pub use validation::validate_form;

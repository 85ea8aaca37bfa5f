//! Checkout: form validation, order placement and UPI links

mod form;
mod order;
mod payment;

pub use form::{CheckoutForm, prefill_phone};
pub use order::{PlacedOrder, place_order};
pub use payment::upi_payment_link;

//! Campus Storefront - food ordering with time-of-day pricing
//!
//! # Modules
//!
//! - **Pricing** (`pricing`): time windows and rule resolution
//! - **Menu** (`menu`): catalog fetch, filtering, search and the menu board
//! - **Cart / Checkout** (`cart`, `checkout`): order placement and UPI links
//! - **Profile** (`profile`): the customer's past orders
//! - **Admin** (`admin`): order, menu, pricing and message management
//! - **Store** (`store`): typed repository over a data store
//!
//! ```text
//! storefront/src/
//! ├── core/          # configuration
//! ├── auth/          # sessions and guards
//! ├── pricing/       # time-of-day pricing
//! ├── menu/          # public menu
//! ├── cart/          # shopping cart
//! ├── checkout/      # order placement
//! ├── profile/       # order history
//! ├── admin/         # admin dashboard
//! ├── store/         # in-memory store, repository
//! └── utils/         # logging, money, validation
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod core;
pub mod menu;
pub mod pricing;
pub mod profile;
pub mod store;
pub mod utils;

// Re-export public types
pub use admin::{AdminDashboard, DashboardStats};
pub use auth::{AdminSession, Session};
pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutForm, PlacedOrder, place_order};
pub use core::{Config, UpiConfig};
pub use menu::{MenuCatalog, MenuFilter, MenuSort};
pub use pricing::{PriceQuote, classify_time_window, resolve_price};
pub use store::{MemoryStore, Repository};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  +-------------------------------+
  |   Campus Storefront           |
  |   fresh food, priced by hour  |
  +-------------------------------+
    "#
    );
}

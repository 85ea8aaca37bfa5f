//! Admin dashboard
//!
//! Order management, menu and pricing rule maintenance, customer messages
//! and headline statistics. Everything here requires the admin role.

mod dashboard;
mod forms;
mod stats;

pub use dashboard::{AdminDashboard, OrderDetail, OrderLine};
pub use forms::{MenuItemForm, MessageForm, PricingRuleForm};
pub use stats::{DashboardStats, OrderTally, filter_orders};

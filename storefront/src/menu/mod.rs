//! Public menu: catalog fetch plus filtering, search and pricing

mod board;
mod catalog;
mod view;

pub use board::render_board;
pub use catalog::{MenuCatalog, fetch_categories, fetch_menu_items, fetch_pricing_rules};
pub use view::{MenuFilter, MenuSort, PricedItem};

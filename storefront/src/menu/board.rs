//! Plain-text menu board

use super::{MenuCatalog, MenuFilter, PricedItem};
use crate::utils::format_inr;
use chrono::Timelike;
use rust_decimal::Decimal;
use shared::models::TimeWindow;
use std::collections::HashSet;
use std::fmt::Write;
use uuid::Uuid;

/// Heading for items whose category is inactive or missing
const OTHER_HEADING: &str = "Other";

/// Render the menu as text: a window banner, then each category with its
/// items at their effective prices
pub fn render_board<T: Timelike>(catalog: &MenuCatalog, instant: &T) -> String {
    let mut out = String::new();
    let window = catalog.window_at(instant);
    let _ = writeln!(out, "== {} menu ==", window.label());

    if catalog.items.is_empty() {
        let _ = writeln!(out, "(no items available)");
        return out;
    }

    for category in &catalog.categories {
        let filter = MenuFilter::default().category(category.id);
        write_section(&mut out, &category.name, &catalog.priced_items(&filter, instant), window);
    }

    let listed: HashSet<Uuid> = catalog.categories.iter().map(|c| c.id).collect();
    let uncategorized: Vec<PricedItem> = catalog
        .priced_items(&MenuFilter::default(), instant)
        .into_iter()
        .filter(|priced| !listed.contains(&priced.item.category_id))
        .collect();
    write_section(&mut out, OTHER_HEADING, &uncategorized, window);

    out
}

fn write_section(out: &mut String, heading: &str, items: &[PricedItem], window: TimeWindow) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading);
    for priced in items {
        let _ = write!(
            out,
            "  {:<28} {:>10}",
            priced.item.name,
            format_inr(priced.effective_price())
        );
        let savings = priced.savings();
        if savings > Decimal::ZERO {
            let _ = write!(
                out,
                "  (was {}, save {})",
                format_inr(priced.item.base_price),
                format_inr(savings)
            );
        } else if savings < Decimal::ZERO {
            let _ = write!(out, "  ({} surcharge)", window.label().to_lowercase());
        }
        let _ = writeln!(out);
    }
}

//! Menu Catalog
//!
//! Snapshot of the public menu: active categories, available items and all
//! pricing rules, fetched together before rendering.

use crate::store::{Direction, Query, Repository};
use shared::error::AppResult;
use shared::models::{Category, MenuItem, PricingRule};

/// Active categories in display order
pub async fn fetch_categories(repo: &Repository) -> AppResult<Vec<Category>> {
    let query = Query::new()
        .eq("is_active", true)
        .order_by("display_order", Direction::Asc);
    repo.list(&query).await
}

/// Items currently offered on the public menu
pub async fn fetch_menu_items(repo: &Repository) -> AppResult<Vec<MenuItem>> {
    repo.list(&Query::new().eq("is_available", true)).await
}

/// Every pricing rule for every item, in backend order
pub async fn fetch_pricing_rules(repo: &Repository) -> AppResult<Vec<PricingRule>> {
    repo.list(&Query::new()).await
}

/// Menu data as of the last successful fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
    pub rules: Vec<PricingRule>,
}

impl MenuCatalog {
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>, rules: Vec<PricingRule>) -> Self {
        Self {
            categories,
            items,
            rules,
        }
    }

    /// Fetch categories, items and rules concurrently
    ///
    /// A failed rule fetch degrades to "always base price"; category and
    /// item failures are returned to the caller.
    pub async fn load(repo: &Repository) -> AppResult<Self> {
        let (categories, items, rules) = tokio::join!(
            fetch_categories(repo),
            fetch_menu_items(repo),
            fetch_pricing_rules(repo),
        );

        let rules = rules.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Pricing rules unavailable, showing base prices");
            Vec::new()
        });

        let catalog = Self::new(categories?, items?, rules);
        tracing::debug!(
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            rules = catalog.rules.len(),
            "Menu catalog loaded"
        );
        Ok(catalog)
    }
}

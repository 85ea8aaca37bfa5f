//! Menu View
//!
//! Client-side filtering, search and sorting of the catalog, with effective
//! prices resolved at a given instant.

use super::MenuCatalog;
use crate::pricing::{PriceQuote, classify_time_window};
use chrono::Timelike;
use rust_decimal::Decimal;
use shared::models::{MenuItem, TimeWindow};
use std::str::FromStr;
use uuid::Uuid;

/// Share of the menu flagged as popular
const POPULAR_SHARE_PERCENT: usize = 30;

/// Menu ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuSort {
    /// Catalog order
    #[default]
    Popular,
    /// Cheapest effective price first
    PriceLow,
    /// Most expensive effective price first
    PriceHigh,
    Name,
}

impl FromStr for MenuSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Self::Popular),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown sort: {}", other)),
        }
    }
}

/// Category, search and sort selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    /// `None` shows every category
    pub category_id: Option<Uuid>,
    /// Case-insensitive match on name or description
    pub search: String,
    pub sort: MenuSort,
}

impl MenuFilter {
    pub fn category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn sort(mut self, sort: MenuSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, item: &MenuItem) -> bool {
        if self.category_id.is_some_and(|id| id != item.category_id) {
            return false;
        }
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        item.name.to_lowercase().contains(&term)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}

/// Menu item with its price at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub item: MenuItem,
    pub quote: PriceQuote,
}

impl PricedItem {
    pub fn effective_price(&self) -> Decimal {
        self.quote.effective_price
    }

    pub fn has_discount(&self) -> bool {
        self.quote.has_discount()
    }

    pub fn savings(&self) -> Decimal {
        self.quote.savings()
    }
}

impl MenuCatalog {
    pub fn item(&self, id: Uuid) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Window used for prices at `instant`
    pub fn window_at<T: Timelike>(&self, instant: &T) -> TimeWindow {
        classify_time_window(instant)
    }

    /// Price of one item at `instant`
    pub fn quote<T: Timelike>(&self, item: &MenuItem, instant: &T) -> PriceQuote {
        PriceQuote::at(item.base_price, item.id, &self.rules, instant)
    }

    /// Items passing the category and search filters, in catalog order
    pub fn filtered_items(&self, filter: &MenuFilter) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Filtered items priced at `instant`, in the requested order
    pub fn priced_items<T: Timelike>(&self, filter: &MenuFilter, instant: &T) -> Vec<PricedItem> {
        let mut priced: Vec<PricedItem> = self
            .filtered_items(filter)
            .into_iter()
            .map(|item| PricedItem {
                item: item.clone(),
                quote: self.quote(item, instant),
            })
            .collect();

        match filter.sort {
            MenuSort::Popular => {}
            MenuSort::PriceLow => priced.sort_by_key(|p| p.effective_price()),
            MenuSort::PriceHigh => {
                priced.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()))
            }
            MenuSort::Name => priced.sort_by(|a, b| {
                a.item
                    .name
                    .to_lowercase()
                    .cmp(&b.item.name.to_lowercase())
                    .then_with(|| a.item.name.cmp(&b.item.name))
            }),
        }
        priced
    }

    /// Number of items in a category, or in the whole menu for `None`
    pub fn category_item_count(&self, category_id: Option<Uuid>) -> usize {
        match category_id {
            None => self.items.len(),
            Some(id) => self.items.iter().filter(|i| i.category_id == id).count(),
        }
    }

    /// Ids of the leading 30% of the menu (rounded up)
    pub fn popular_item_ids(&self) -> Vec<Uuid> {
        let count = (self.items.len() * POPULAR_SHARE_PERCENT).div_ceil(100);
        self.items.iter().take(count).map(|i| i.id).collect()
    }

    pub fn is_popular(&self, id: Uuid) -> bool {
        self.popular_item_ids().contains(&id)
    }
}

//! Shopping cart
//!
//! Client-side cart. Each line captures the effective price at the moment it
//! was added; later window changes do not reprice it.

use crate::menu::PricedItem;
use crate::utils::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub menu_item_id: Uuid,
    pub name: String,
    /// Unit price when the item was added
    pub price: Decimal,
    pub quantity: u32,
    pub image_url: Option<String>,
}

impl CartItem {
    /// Single unit of a menu item at its effective price
    pub fn from_priced(priced: &PricedItem) -> Self {
        Self {
            menu_item_id: priced.item.id,
            name: priced.item.name.clone(),
            price: priced.effective_price(),
            quantity: 1,
            image_url: priced.item.image_url.clone(),
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add a line, or bump the quantity of an existing line for the same item
    ///
    /// An existing line keeps the price it was first added at.
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|line| line.menu_item_id == item.menu_item_id)
        {
            Some(line) => line.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    pub fn remove_item(&mut self, menu_item_id: Uuid) {
        self.items.retain(|line| line.menu_item_id != menu_item_id);
    }

    /// Set a line's quantity; zero or less removes the line
    pub fn update_quantity(&mut self, menu_item_id: Uuid, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(menu_item_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals, rounded to 2 decimal places
    pub fn total(&self) -> Decimal {
        round_money(self.items.iter().map(CartItem::line_total).sum())
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Admin input forms

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{MenuItemCreate, MessageCreate, PricingRuleCreate, TimeWindow};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative")
            .with_message(Cow::Borrowed("Price cannot be negative")));
    }
    Ok(())
}

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("positive")
            .with_message(Cow::Borrowed("Price multiplier must be greater than zero")));
    }
    Ok(())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// New menu item
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuItemForm {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub base_price: Decimal,
    #[validate(required(message = "Category is required"))]
    pub category_id: Option<Uuid>,
    pub image_url: Option<String>,
}

impl MenuItemForm {
    /// Trimmed copy; blank optional text becomes `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: blank_to_none(self.description),
            image_url: blank_to_none(self.image_url),
            ..self
        }
    }

    /// Insert payload; call on the normalized form after validation
    pub(super) fn into_create(self, category_id: Uuid) -> MenuItemCreate {
        MenuItemCreate {
            name: self.name,
            description: self.description,
            base_price: self.base_price,
            category_id,
            image_url: self.image_url,
            is_available: true,
        }
    }
}

/// New pricing rule
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PricingRuleForm {
    #[validate(required(message = "Menu item is required"))]
    pub menu_item_id: Option<Uuid>,
    pub time_of_day: TimeWindow,
    #[validate(custom(function = "positive"))]
    pub price_multiplier: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub fixed_price: Option<Decimal>,
}

impl Default for PricingRuleForm {
    fn default() -> Self {
        Self {
            menu_item_id: None,
            time_of_day: TimeWindow::Morning,
            price_multiplier: Decimal::ONE,
            fixed_price: None,
        }
    }
}

impl PricingRuleForm {
    pub(super) fn into_create(self, menu_item_id: Uuid) -> PricingRuleCreate {
        PricingRuleCreate {
            menu_item_id,
            time_of_day: self.time_of_day,
            price_multiplier: self.price_multiplier,
            fixed_price: self.fixed_price,
        }
    }
}

/// Message to a customer about an order
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MessageForm {
    #[validate(required(message = "Order is required"))]
    pub order_id: Option<Uuid>,
    #[validate(required(message = "Customer is required"))]
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Message text is required"))]
    pub message: String,
}

impl MessageForm {
    pub fn normalized(self) -> Self {
        Self {
            message: self.message.trim().to_string(),
            ..self
        }
    }

    pub(super) fn into_create(self, order_id: Uuid, user_id: Uuid, sent_by: Uuid) -> MessageCreate {
        MessageCreate {
            order_id,
            user_id,
            message: self.message,
            sent_by: Some(sent_by),
        }
    }
}

//! Admin dashboard operations

use super::{MenuItemForm, MessageForm, PricingRuleForm};
use crate::auth::{AdminSession, Session, require_admin};
use crate::pricing::duplicate_rules;
use crate::store::{ChangeEvent, ChangeFeed, Direction, Query, Repository, Subscription, Table};
use crate::utils::validate_form;
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{
    Category, MenuItem, MenuItemUpdate, Message, Order, OrderItem, OrderStatus,
    OrderStatusUpdate, PricingRule, Profile,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Order line with the menu item it refers to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub item: OrderItem,
    /// `None` when the menu item has since been deleted
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Order with its lines and customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub order: Order,
    pub lines: Vec<OrderLine>,
    pub customer: Option<Profile>,
}

impl OrderDetail {
    /// `term` must already be lowercase
    pub(super) fn matches_search(&self, term: &str) -> bool {
        let contains = |value: Option<&str>| value.is_some_and(|v| v.to_lowercase().contains(term));
        self.order.id.to_string().contains(term)
            || contains(self.customer.as_ref().and_then(|c| c.full_name.as_deref()))
            || contains(self.customer.as_ref().and_then(|c| c.email.as_deref()))
    }
}

/// Order, menu, pricing and messaging management for administrators
///
/// Only constructible from an [`AdminSession`], so every operation is
/// gated on the admin role.
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    repo: Repository,
    admin: AdminSession,
}

impl AdminDashboard {
    pub fn new(repo: Repository, admin: AdminSession) -> Self {
        Self { repo, admin }
    }

    /// Check the admin role and open the dashboard
    pub async fn open(repo: Repository, session: Option<&Session>) -> AppResult<Self> {
        let admin = require_admin(&repo, session).await?;
        tracing::info!(user_id = %admin.user_id(), "Admin dashboard opened");
        Ok(Self::new(repo, admin))
    }

    pub fn admin(&self) -> &AdminSession {
        &self.admin
    }

    // ========== Orders ==========

    /// Every order, newest first, with lines and customer profile
    pub async fn orders(&self) -> AppResult<Vec<OrderDetail>> {
        let newest_first = Query::new().order_by("created_at", Direction::Desc);
        let all = Query::new();
        let (orders, items, menu, profiles) = tokio::try_join!(
            self.repo.list::<Order>(&newest_first),
            self.repo.list::<OrderItem>(&all),
            self.repo.list::<MenuItem>(&all),
            self.repo.list::<Profile>(&all),
        )?;

        let menu: HashMap<Uuid, MenuItem> = menu.into_iter().map(|m| (m.id, m)).collect();
        let profiles: HashMap<Uuid, Profile> =
            profiles.into_iter().map(|p| (p.id, p)).collect();
        let mut lines: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
        for item in items {
            let menu_item = menu.get(&item.menu_item_id);
            lines.entry(item.order_id).or_default().push(OrderLine {
                name: menu_item.map(|m| m.name.clone()),
                image_url: menu_item.and_then(|m| m.image_url.clone()),
                item,
            });
        }

        Ok(orders
            .into_iter()
            .map(|order| OrderDetail {
                lines: lines.remove(&order.id).unwrap_or_default(),
                customer: profiles.get(&order.user_id).cloned(),
                order,
            })
            .collect())
    }

    pub async fn update_order_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> AppResult<Order> {
        let order: Order = self
            .repo
            .update(order_id, &OrderStatusUpdate { status })
            .await?;
        tracing::info!(order_id = %order_id, status = %status, "Order status updated");
        Ok(order)
    }

    /// Deliver order changes to `callback` until the subscription is dropped
    pub fn watch_orders<F>(&self, feed: &dyn ChangeFeed, callback: F) -> Subscription
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        tracing::debug!("Watching order changes");
        feed.subscribe(Table::Orders, Box::new(callback))
    }

    // ========== Menu ==========

    /// Every menu item, including unavailable ones
    pub async fn menu_items(&self) -> AppResult<Vec<MenuItem>> {
        self.repo
            .list(&Query::new().order_by("name", Direction::Asc))
            .await
    }

    /// Every category, including inactive ones, in display order
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.repo
            .list(&Query::new().order_by("display_order", Direction::Asc))
            .await
    }

    pub async fn add_menu_item(&self, form: MenuItemForm) -> AppResult<MenuItem> {
        let form = form.normalized();
        validate_form(&form)?;
        let category_id = form
            .category_id
            .ok_or_else(|| AppError::validation("Category is required"))?;
        self.repo.get::<Category>(category_id).await?;

        let item: MenuItem = self.repo.insert(&form.into_create(category_id)).await?;
        tracing::info!(item_id = %item.id, name = %item.name, "Menu item added");
        Ok(item)
    }

    pub async fn delete_menu_item(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete::<MenuItem>(id).await?;
        tracing::info!(item_id = %id, "Menu item deleted");
        Ok(())
    }

    /// Flip `is_available` and return the updated item
    pub async fn toggle_item_availability(&self, id: Uuid) -> AppResult<MenuItem> {
        let item: MenuItem = self.repo.get(id).await?;
        let patch = MenuItemUpdate {
            is_available: Some(!item.is_available),
            ..Default::default()
        };
        let item: MenuItem = self.repo.update(id, &patch).await?;
        tracing::info!(
            item_id = %id,
            available = item.is_available,
            "Menu item availability changed"
        );
        Ok(item)
    }

    // ========== Pricing ==========

    pub async fn pricing_rules(&self) -> AppResult<Vec<PricingRule>> {
        let rules: Vec<PricingRule> = self.repo.list(&Query::new()).await?;
        for (menu_item_id, window) in duplicate_rules(&rules) {
            tracing::warn!(
                menu_item_id = %menu_item_id,
                window = %window,
                "Several pricing rules share a window; only the first applies"
            );
        }
        Ok(rules)
    }

    pub async fn add_pricing_rule(&self, form: PricingRuleForm) -> AppResult<PricingRule> {
        validate_form(&form)?;
        let menu_item_id = form
            .menu_item_id
            .ok_or_else(|| AppError::validation("Menu item is required"))?;
        self.repo.get::<MenuItem>(menu_item_id).await?;

        let existing = Query::new()
            .eq("menu_item_id", menu_item_id.to_string())
            .eq("time_of_day", form.time_of_day.as_str());
        if self.repo.find::<PricingRule>(&existing).await?.is_some() {
            tracing::warn!(
                menu_item_id = %menu_item_id,
                window = %form.time_of_day,
                "Item already has a rule for this window; the new rule will not apply"
            );
        }

        let rule: PricingRule = self.repo.insert(&form.into_create(menu_item_id)).await?;
        tracing::info!(
            rule_id = %rule.id,
            menu_item_id = %menu_item_id,
            window = %rule.time_of_day,
            "Pricing rule added"
        );
        Ok(rule)
    }

    pub async fn delete_pricing_rule(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete::<PricingRule>(id).await?;
        tracing::info!(rule_id = %id, "Pricing rule deleted");
        Ok(())
    }

    // ========== Messages ==========

    /// Every message, newest first
    pub async fn messages(&self) -> AppResult<Vec<Message>> {
        self.repo
            .list(&Query::new().order_by("created_at", Direction::Desc))
            .await
    }

    /// Send a message about an order, signed by the current admin
    pub async fn send_message(&self, form: MessageForm) -> AppResult<Message> {
        let form = form.normalized();
        validate_form(&form)?;
        let (Some(order_id), Some(user_id)) = (form.order_id, form.user_id) else {
            return Err(AppError::validation("Please fill all fields"));
        };

        let payload = form.into_create(order_id, user_id, self.admin.user_id());
        let message: Message = self.repo.insert(&payload).await?;
        tracing::info!(message_id = %message.id, order_id = %order_id, "Message sent");
        Ok(message)
    }
}

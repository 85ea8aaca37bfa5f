//! Order filtering and dashboard statistics

use super::OrderDetail;
use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Order, OrderStatus, PaymentMethod};
use std::collections::HashMap;

/// Orders matching a search term and an optional status
///
/// The term is matched case-insensitively against the order id and the
/// customer's name and email.
pub fn filter_orders<'a>(
    orders: &'a [OrderDetail],
    search: &str,
    status: Option<OrderStatus>,
) -> Vec<&'a OrderDetail> {
    let term = search.trim().to_lowercase();
    orders
        .iter()
        .filter(|detail| status.is_none_or(|s| detail.order.status == s))
        .filter(|detail| term.is_empty() || detail.matches_search(&term))
        .collect()
}

/// Count and revenue of one group of orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderTally {
    pub count: usize,
    pub revenue: Decimal,
}

impl OrderTally {
    fn add(&mut self, order: &Order) {
        self.count += 1;
        self.revenue += order.total_amount;
    }
}

/// Headline numbers for the admin dashboard
///
/// Revenue includes every order regardless of status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total: OrderTally,
    pub today: OrderTally,
    pub by_status: HashMap<OrderStatus, usize>,
    pub by_payment_method: HashMap<PaymentMethod, OrderTally>,
}

impl DashboardStats {
    /// Compute statistics; "today" is the calendar day of `now` in its zone
    pub fn compute<'a, Tz: TimeZone>(
        orders: impl IntoIterator<Item = &'a Order>,
        now: &DateTime<Tz>,
    ) -> Self {
        let today = now.date_naive();
        let zone = now.timezone();
        let mut stats = Self::default();
        for status in OrderStatus::ALL {
            stats.by_status.insert(status, 0);
        }
        for method in PaymentMethod::ALL {
            stats.by_payment_method.insert(method, OrderTally::default());
        }

        for order in orders {
            stats.total.add(order);
            if order.created_at.with_timezone(&zone).date_naive() == today {
                stats.today.add(order);
            }
            *stats.by_status.entry(order.status).or_default() += 1;
            stats
                .by_payment_method
                .entry(order.payment_method)
                .or_default()
                .add(order);
        }
        stats
    }

    /// [`DashboardStats::compute`] against the local clock
    pub fn compute_now<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        Self::compute(orders, &Local::now())
    }

    pub fn status_count(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or_default()
    }

    pub fn payment_method(&self, method: PaymentMethod) -> OrderTally {
        self.by_payment_method
            .get(&method)
            .copied()
            .unwrap_or_default()
    }
}

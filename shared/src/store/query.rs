//! Query types for the hosted backend tables
//!
//! A small subset of what the backend's row API understands: equality
//! filters, one ordering column and an optional row limit.

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Backend tables the storefront reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Categories,
    MenuItems,
    PricingRules,
    Orders,
    OrderItems,
    Messages,
    Profiles,
    UserRoles,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::Categories,
        Table::MenuItems,
        Table::PricingRules,
        Table::Orders,
        Table::OrderItems,
        Table::Messages,
        Table::Profiles,
        Table::UserRoles,
    ];

    /// Table name on the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::MenuItems => "menu_items",
            Self::PricingRules => "pricing_rules",
            Self::Orders => "orders",
            Self::OrderItems => "order_items",
            Self::Messages => "messages",
            Self::Profiles => "profiles",
            Self::UserRoles => "user_roles",
        }
    }

    /// Tables whose rows get a `created_at` timestamp on insert
    pub fn has_created_at(&self) -> bool {
        matches!(self, Self::Orders | Self::Messages)
    }

    /// Boolean columns the backend fills with `true` when a new row omits them
    pub fn default_true_columns(&self) -> &'static [&'static str] {
        match self {
            Self::MenuItems => &["is_available"],
            Self::Categories => &["is_active"],
            _ => &[],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Equality filter on one column
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

/// Ordering on one column
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// Row query
///
/// ```
/// use shared::store::{Direction, Query};
///
/// let query = Query::new()
///     .eq("is_active", true)
///     .order_by("display_order", Direction::Asc);
/// assert_eq!(query.filters.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    /// Query matching every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Query matching the row with the given id
    pub fn by_id(id: Uuid) -> Self {
        Self::new().eq("id", id.to_string())
    }

    /// Add an equality filter
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Set the ordering column
    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    /// Limit the number of returned rows
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a row satisfies every filter
    pub fn matches(&self, row: &Value) -> bool {
        self.filters
            .iter()
            .all(|f| row.get(&f.column).unwrap_or(&Value::Null) == &f.value)
    }

    /// Compare two rows by the ordering column, if any
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let Some(order) = &self.order else {
            return Ordering::Equal;
        };
        let left = a.get(&order.column).unwrap_or(&Value::Null);
        let right = b.get(&order.column).unwrap_or(&Value::Null);
        let ordering = compare_values(left, right);
        match order.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Total order over the JSON shapes the tables contain
///
/// Numbers compare numerically, strings holding RFC 3339 timestamps compare
/// chronologically, decimal strings compare numerically, nulls sort first.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => compare_strings(x, y),
        _ => Ordering::Equal,
    }
}

fn compare_strings(x: &str, y: &str) -> Ordering {
    if let (Ok(x), Ok(y)) = (
        chrono::DateTime::parse_from_rfc3339(x),
        chrono::DateTime::parse_from_rfc3339(y),
    ) {
        return x.cmp(&y);
    }
    if let (Ok(x), Ok(y)) = (
        x.parse::<rust_decimal::Decimal>(),
        y.parse::<rust_decimal::Decimal>(),
    ) {
        return x.cmp(&y);
    }
    x.cmp(y)
}

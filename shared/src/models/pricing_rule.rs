//! Pricing Rule Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Time-of-day window a pricing rule applies to
///
/// Boundaries (local wall-clock hour):
/// - Morning: [6, 12)
/// - Afternoon: [12, 18)
/// - Evening: [18, 22)
/// - Night: [22, 24) and [0, 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::Morning,
        TimeWindow::Afternoon,
        TimeWindow::Evening,
        TimeWindow::Night,
    ];

    /// Window containing a wall-clock hour; anything outside the three
    /// daytime ranges (including hours past 23) is night
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..12 => Self::Morning,
            12..18 => Self::Afternoon,
            18..22 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Column value as stored by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Display label ("Morning Special Prices")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing rule entity
///
/// Overrides the base price of one menu item during one time window.
/// `fixed_price`, when present, replaces the price outright and the
/// multiplier is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    pub id: Uuid,
    /// Menu item reference; rules pointing at unknown items never match
    pub menu_item_id: Uuid,
    pub time_of_day: TimeWindow,
    #[serde(default = "default_multiplier")]
    pub price_multiplier: Decimal,
    pub fixed_price: Option<Decimal>,
}

pub fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// Create pricing rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRuleCreate {
    pub menu_item_id: Uuid,
    pub time_of_day: TimeWindow,
    #[serde(default = "default_multiplier")]
    pub price_multiplier: Decimal,
    pub fixed_price: Option<Decimal>,
}

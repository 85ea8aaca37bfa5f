//! Price Resolver
//!
//! Computes the effective price of a menu item at an instant from its base
//! price and the time-of-day pricing rules.
//!
//! Uniqueness of (menu item, window) is not enforced by the backend. When
//! several rules match, the first one in input order wins; callers that
//! fetch rules should keep the backend's row order.

use super::window::classify_time_window;
use chrono::{Local, Timelike};
use rust_decimal::Decimal;
use shared::models::{PricingRule, TimeWindow};
use uuid::Uuid;

/// First rule targeting `menu_item_id` in `window`
pub fn find_rule_in_window(
    menu_item_id: Uuid,
    rules: &[PricingRule],
    window: TimeWindow,
) -> Option<&PricingRule> {
    rules
        .iter()
        .find(|rule| rule.menu_item_id == menu_item_id && rule.time_of_day == window)
}

/// First rule applying to `menu_item_id` at `instant`
pub fn find_rule<'a, T: Timelike>(
    menu_item_id: Uuid,
    rules: &'a [PricingRule],
    instant: &T,
) -> Option<&'a PricingRule> {
    find_rule_in_window(menu_item_id, rules, classify_time_window(instant))
}

/// Price produced by a single rule
///
/// A present fixed price (zero included) replaces the base price and the
/// multiplier is ignored.
pub fn apply_rule(rule: &PricingRule, base_price: Decimal) -> Decimal {
    match rule.fixed_price {
        Some(fixed) => fixed,
        None => base_price * rule.price_multiplier,
    }
}

/// Effective price of a menu item at `instant`
///
/// Falls back to `base_price` when no rule matches, including when the item
/// id is unknown or `rules` is empty.
pub fn resolve_price<T: Timelike>(
    base_price: Decimal,
    menu_item_id: Uuid,
    rules: &[PricingRule],
    instant: &T,
) -> Decimal {
    match find_rule(menu_item_id, rules, instant) {
        Some(rule) => apply_rule(rule, base_price),
        None => base_price,
    }
}

/// [`resolve_price`] at the current local time
pub fn resolve_price_now(
    base_price: Decimal,
    menu_item_id: Uuid,
    rules: &[PricingRule],
) -> Decimal {
    resolve_price(base_price, menu_item_id, rules, &Local::now())
}

/// Base and effective price of one item at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub effective_price: Decimal,
    pub window: TimeWindow,
    /// Rule that produced the effective price
    pub rule_id: Option<Uuid>,
}

impl PriceQuote {
    /// Quote `menu_item_id` at `instant`
    pub fn at<T: Timelike>(
        base_price: Decimal,
        menu_item_id: Uuid,
        rules: &[PricingRule],
        instant: &T,
    ) -> Self {
        let window = classify_time_window(instant);
        let rule = find_rule_in_window(menu_item_id, rules, window);
        Self {
            base_price,
            effective_price: rule.map_or(base_price, |r| apply_rule(r, base_price)),
            window,
            rule_id: rule.map(|r| r.id),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.effective_price != self.base_price
    }

    /// Base minus effective price; negative when a rule raises the price
    pub fn savings(&self) -> Decimal {
        self.base_price - self.effective_price
    }
}

/// (menu item, window) pairs targeted by more than one rule
///
/// Each pair is reported once, in order of its second occurrence.
pub fn duplicate_rules(rules: &[PricingRule]) -> Vec<(Uuid, TimeWindow)> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for rule in rules {
        let key = (rule.menu_item_id, rule.time_of_day);
        if !seen.insert(key) && !duplicates.contains(&key) {
            duplicates.push(key);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 30, 0).unwrap()
    }

    fn make_rule(
        menu_item_id: Uuid,
        time_of_day: TimeWindow,
        multiplier: Decimal,
        fixed_price: Option<Decimal>,
    ) -> PricingRule {
        PricingRule {
            id: Uuid::new_v4(),
            menu_item_id,
            time_of_day,
            price_multiplier: multiplier,
            fixed_price,
        }
    }

    #[test]
    fn test_empty_rules_return_base_price() {
        let item = Uuid::new_v4();
        for hour in [0, 6, 12, 18, 22] {
            assert_eq!(
                resolve_price(Decimal::from(100), item, &[], &at(hour)),
                Decimal::from(100)
            );
        }
        assert_eq!(resolve_price(Decimal::ZERO, item, &[], &at(9)), Decimal::ZERO);
    }

    #[test]
    fn test_fixed_price_wins_over_multiplier() {
        let item = Uuid::new_v4();
        let rule = make_rule(
            item,
            TimeWindow::Morning,
            Decimal::from(2),
            Some(Decimal::from(50)),
        );
        assert_eq!(
            resolve_price(Decimal::from(100), item, &[rule], &at(8)),
            Decimal::from(50)
        );
    }

    #[test]
    fn test_multiplier_applies_without_fixed_price() {
        let item = Uuid::new_v4();
        let rule = make_rule(item, TimeWindow::Evening, Decimal::new(15, 1), None);
        assert_eq!(
            resolve_price(Decimal::from(80), item, &[rule], &at(19)),
            Decimal::from(120)
        );
    }

    #[test]
    fn test_other_window_returns_base_price() {
        let item = Uuid::new_v4();
        let rule = make_rule(item, TimeWindow::Evening, Decimal::new(15, 1), None);
        assert_eq!(
            resolve_price(Decimal::from(80), item, &[rule], &at(14)),
            Decimal::from(80)
        );
    }

    #[test]
    fn test_unknown_item_returns_base_price() {
        let rule = make_rule(Uuid::new_v4(), TimeWindow::Night, Decimal::from(3), None);
        assert_eq!(
            resolve_price(Decimal::from(40), Uuid::new_v4(), &[rule], &at(23)),
            Decimal::from(40)
        );
    }

    #[test]
    fn test_zero_fixed_price_is_honored() {
        let item = Uuid::new_v4();
        let rule = make_rule(item, TimeWindow::Afternoon, Decimal::from(2), Some(Decimal::ZERO));
        assert_eq!(
            resolve_price(Decimal::from(30), item, &[rule], &at(13)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let item = Uuid::new_v4();
        let first = make_rule(item, TimeWindow::Night, Decimal::new(5, 1), None);
        let second = make_rule(item, TimeWindow::Night, Decimal::ONE, Some(Decimal::from(1)));
        let rules = vec![first.clone(), second.clone()];

        assert_eq!(
            resolve_price(Decimal::from(60), item, &rules, &at(2)),
            Decimal::from(30)
        );
        assert_eq!(find_rule(item, &rules, &at(2)).map(|r| r.id), Some(first.id));

        let reversed = vec![second, first];
        assert_eq!(
            resolve_price(Decimal::from(60), item, &reversed, &at(2)),
            Decimal::from(1)
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let item = Uuid::new_v4();
        let rules = vec![make_rule(item, TimeWindow::Morning, Decimal::new(9, 1), None)];
        let first = resolve_price(Decimal::from(55), item, &rules, &at(10));
        let second = resolve_price(Decimal::from(55), item, &rules, &at(10));
        assert_eq!(first, second);
        assert_eq!(first, Decimal::new(495, 1));
    }

    #[test]
    fn test_quote_derived_fields() {
        let item = Uuid::new_v4();
        let discount = make_rule(item, TimeWindow::Morning, Decimal::new(8, 1), None);
        let quote = PriceQuote::at(Decimal::from(100), item, &[discount.clone()], &at(7));
        assert_eq!(quote.window, TimeWindow::Morning);
        assert_eq!(quote.effective_price, Decimal::from(80));
        assert!(quote.has_discount());
        assert_eq!(quote.savings(), Decimal::from(20));
        assert_eq!(quote.rule_id, Some(discount.id));

        let surcharge = make_rule(item, TimeWindow::Night, Decimal::new(125, 2), None);
        let quote = PriceQuote::at(Decimal::from(100), item, &[surcharge], &at(23));
        assert!(quote.has_discount());
        assert_eq!(quote.savings(), Decimal::from(-25));

        let quote = PriceQuote::at(Decimal::from(100), item, &[], &at(23));
        assert!(!quote.has_discount());
        assert_eq!(quote.savings(), Decimal::ZERO);
        assert_eq!(quote.rule_id, None);
    }

    #[test]
    fn test_duplicate_rules() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rules = vec![
            make_rule(a, TimeWindow::Morning, Decimal::ONE, None),
            make_rule(a, TimeWindow::Evening, Decimal::ONE, None),
            make_rule(b, TimeWindow::Morning, Decimal::ONE, None),
            make_rule(a, TimeWindow::Morning, Decimal::ONE, None),
            make_rule(a, TimeWindow::Morning, Decimal::ONE, None),
        ];
        assert_eq!(duplicate_rules(&rules), vec![(a, TimeWindow::Morning)]);
        assert!(duplicate_rules(&rules[..3]).is_empty());
    }
}

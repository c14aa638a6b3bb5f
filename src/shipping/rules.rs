//! Basket-level discount rules.
//!
//! A rule re-runs the per-line pricing pass and then adjusts the
//! aggregate. The one shipped rule rewards consolidating shipments: when
//! several line items from the same supplier ship to the same region
//! under the same shipping option, a fixed deduction comes off the total.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::calculator::price_line_items;
use super::error::ShippingError;
use crate::basket::{Basket, LineItem};
use crate::simple_types::{Money, Region, StrategyId, SupplierId};

/// A basket-level post-processing discount policy.
///
/// `apply` owns the whole computation for its entry point: it performs
/// the same per-line pricing pass as the base calculator (annotating the
/// line items as a side effect) and then adjusts the sum.
pub trait RuleCalculator {
    /// Prices the basket and applies the rule's adjustment to the total.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError`] when the per-line pricing pass fails.
    fn apply(&self, basket: &mut Basket) -> Result<Money, ShippingError>;
}

/// Grouping key for shipment consolidation.
///
/// An explicit tuple of the three grouping dimensions. Strategy identity
/// enters as the instance's [`StrategyId`], so grouping is deterministic
/// and collision-free; value-equal strategies constructed separately
/// never merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ConsolidationKey {
    supplier_id: SupplierId,
    delivery_region: Region,
    strategy: StrategyId,
}

impl ConsolidationKey {
    fn of(line_item: &LineItem) -> Self {
        Self {
            supplier_id: line_item.supplier_id(),
            delivery_region: line_item.delivery_region(),
            strategy: line_item.shipping().id(),
        }
    }
}

/// Deducts a fixed amount when the basket contains at least two line
/// items sharing supplier, delivery region and shipping option instance.
///
/// The deduction is configured in minor currency units (e.g. pence) and
/// converted by dividing by 100. It is subtracted exactly once however
/// many duplicate groups exist and however large they are: a flat
/// consolidation incentive, not a per-pair discount.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use marketplace_shipping::basket::{Basket, LineItem};
/// use marketplace_shipping::shipping::{
///     RegionRate, SameShippingOptionSupplierAndRegionRule, ShippingCalculator,
///     ShippingStrategy,
/// };
/// use marketplace_shipping::simple_types::{
///     LineItemId, Money, ProductId, Region, SupplierId,
/// };
/// use rust_decimal::Decimal;
///
/// let uk_thirty = Arc::new(ShippingStrategy::new_per_region(vec![RegionRate::new(
///     Region::Uk,
///     Money::from_decimal(Decimal::from(30)),
/// )]));
/// let make_line = |id: u32| {
///     LineItem::new(
///         LineItemId::new(id),
///         ProductId::create("P1").unwrap(),
///         Money::zero(),
///         SupplierId::new(1),
///         Region::Uk,
///         Arc::clone(&uk_thirty),
///     )
/// };
/// let mut basket = Basket::new(vec![make_line(1), make_line(2)]);
///
/// let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(50)); // 50 pence
/// let total = ShippingCalculator::new()
///     .calculate_shipping_with_rule(&mut basket, &rule)
///     .unwrap();
/// assert_eq!(total, Money::from_decimal(Decimal::new(595, 1))); // 30 + 30 - 0.50
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SameShippingOptionSupplierAndRegionRule {
    deduction_value: Decimal,
}

impl SameShippingOptionSupplierAndRegionRule {
    /// Creates the rule with a deduction expressed in minor currency
    /// units (e.g. 50 for fifty pence).
    #[must_use]
    pub const fn new(deduction_value: Decimal) -> Self {
        Self { deduction_value }
    }

    /// Returns the configured deduction in minor currency units.
    #[must_use]
    pub const fn deduction_value(&self) -> Decimal {
        self.deduction_value
    }
}

impl RuleCalculator for SameShippingOptionSupplierAndRegionRule {
    fn apply(&self, basket: &mut Basket) -> Result<Money, ShippingError> {
        let sum = price_line_items(basket)?;

        let mut group_sizes: HashMap<ConsolidationKey, usize> = HashMap::new();
        for line_item in basket.line_items() {
            *group_sizes.entry(ConsolidationKey::of(line_item)).or_insert(0) += 1;
        }

        // An empty basket has no groups and therefore no deduction.
        let largest_group = group_sizes.values().copied().max().unwrap_or(0);
        if largest_group > 1 {
            let deduction = Money::from_minor_units(self.deduction_value);
            tracing::debug!(
                %deduction,
                largest_group,
                "duplicate consolidation group found, deducting once",
            );
            Ok(sum - deduction)
        } else {
            Ok(sum)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::shipping::strategy::{RegionRate, ShippingStrategy};
    use crate::simple_types::{LineItemId, ProductId};
    use rstest::rstest;
    use std::str::FromStr;

    fn money(value: &str) -> Money {
        Money::from_decimal(Decimal::from_str(value).unwrap())
    }

    fn line(
        id: u32,
        supplier: u32,
        region: Region,
        strategy: &Arc<ShippingStrategy>,
    ) -> LineItem {
        LineItem::new(
            LineItemId::new(id),
            ProductId::create(&format!("P{id}")).unwrap(),
            money("20"),
            SupplierId::new(supplier),
            region,
            Arc::clone(strategy),
        )
    }

    fn uk_strategy(rate: &str) -> Arc<ShippingStrategy> {
        Arc::new(ShippingStrategy::new_per_region(vec![RegionRate::new(
            Region::Uk,
            money(rate),
        )]))
    }

    #[rstest]
    fn deducts_once_for_a_duplicate_group() {
        let shared = uk_strategy("30");
        let other = uk_strategy("25");
        let mut basket = Basket::new(vec![
            line(1, 1, Region::Uk, &shared),
            line(2, 1, Region::Uk, &shared),
            line(3, 3, Region::Uk, &other),
        ]);

        let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(50));
        let total = rule.apply(&mut basket).unwrap();

        assert_eq!(total, money("84.5"));
    }

    #[rstest]
    fn no_duplicate_group_leaves_sum_unchanged() {
        let shared = uk_strategy("30");
        let mut basket = Basket::new(vec![
            line(1, 1, Region::Uk, &shared),
            line(2, 2, Region::Uk, &shared), // different supplier
        ]);

        let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(50));
        let total = rule.apply(&mut basket).unwrap();

        assert_eq!(total, money("60"));
    }

    #[rstest]
    fn value_equal_strategies_do_not_group() {
        let first = uk_strategy("30");
        let second = uk_strategy("30");
        let mut basket = Basket::new(vec![
            line(1, 1, Region::Uk, &first),
            line(2, 1, Region::Uk, &second),
        ]);

        let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(50));
        let total = rule.apply(&mut basket).unwrap();

        assert_eq!(total, money("60"));
    }

    #[rstest]
    fn deduction_is_flat_across_many_duplicate_groups() {
        let first = uk_strategy("10");
        let second = uk_strategy("10");
        let mut basket = Basket::new(vec![
            line(1, 1, Region::Uk, &first),
            line(2, 1, Region::Uk, &first),
            line(3, 2, Region::Uk, &second),
            line(4, 2, Region::Uk, &second),
            line(5, 2, Region::Uk, &second),
        ]);

        let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(100));
        let total = rule.apply(&mut basket).unwrap();

        // 5 * 10, minus a single 1.00 deduction
        assert_eq!(total, money("49"));
    }

    #[rstest]
    fn empty_basket_yields_zero_without_deduction() {
        let mut basket = Basket::new(vec![]);

        let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(50));
        let total = rule.apply(&mut basket).unwrap();

        assert!(total.is_zero());
    }

    #[rstest]
    fn default_rule_deducts_nothing() {
        let shared = uk_strategy("30");
        let mut basket = Basket::new(vec![
            line(1, 1, Region::Uk, &shared),
            line(2, 1, Region::Uk, &shared),
        ]);

        let rule = SameShippingOptionSupplierAndRegionRule::default();
        let total = rule.apply(&mut basket).unwrap();

        assert_eq!(total, money("60"));
    }

    #[rstest]
    fn rule_annotates_line_items() {
        let shared = uk_strategy("30");
        let mut basket = Basket::new(vec![
            line(1, 1, Region::Uk, &shared),
            line(2, 1, Region::Uk, &shared),
        ]);

        let rule = SameShippingOptionSupplierAndRegionRule::new(Decimal::from(50));
        rule.apply(&mut basket).unwrap();

        for line_item in basket.line_items() {
            assert_eq!(line_item.shipping_amount(), Some(money("30")));
            assert_eq!(line_item.shipping_description(), Some("Shipping to UK"));
        }
    }
}

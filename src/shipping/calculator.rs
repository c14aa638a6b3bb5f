//! Basket-level shipping calculation.

use std::sync::Arc;

use super::error::ShippingError;
use super::rules::RuleCalculator;
use crate::basket::Basket;
use crate::simple_types::Money;

/// Aggregates per-line shipping amounts into a basket total.
///
/// The calculator holds no state; it exists so callers have one seam for
/// both the plain aggregation and the rule-delegating entry point.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use marketplace_shipping::basket::{Basket, LineItem};
/// use marketplace_shipping::shipping::{ShippingCalculator, ShippingStrategy};
/// use marketplace_shipping::simple_types::{
///     LineItemId, Money, ProductId, Region, SupplierId,
/// };
/// use rust_decimal::Decimal;
///
/// let flat = Arc::new(ShippingStrategy::flat_rate(Money::from_decimal(Decimal::new(
///     110, 2,
/// ))));
/// let mut basket = Basket::new(vec![LineItem::new(
///     LineItemId::new(1),
///     ProductId::create("P1").unwrap(),
///     Money::zero(),
///     SupplierId::new(1),
///     Region::Uk,
///     flat,
/// )]);
///
/// let total = ShippingCalculator::new().calculate_shipping(&mut basket).unwrap();
/// assert_eq!(total, Money::from_decimal(Decimal::new(110, 2)));
/// assert!(basket.line_items()[0].shipping_amount().is_some());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ShippingCalculator;

impl ShippingCalculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Prices every line item and returns the basket's shipping total.
    ///
    /// Each line is priced by its own strategy; the resulting amount and
    /// description are recorded onto the line item as a documented side
    /// effect, replacing any annotations from a previous pass. The total
    /// is the exact decimal sum over all lines, independent of basket
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError`] when a corrected per-region strategy has
    /// no entry for a line's delivery region. Lines priced before the
    /// failing one keep their fresh annotations.
    pub fn calculate_shipping(&self, basket: &mut Basket) -> Result<Money, ShippingError> {
        let total = price_line_items(basket)?;
        tracing::debug!(
            lines = basket.line_items().len(),
            total = %total,
            "calculated basket shipping",
        );
        Ok(total)
    }

    /// Prices the basket through a discount rule.
    ///
    /// Delegates entirely to [`RuleCalculator::apply`]; the rule performs
    /// the same per-line pass internally before adjusting the aggregate,
    /// so line-item annotations are written by this entry point too.
    ///
    /// # Errors
    ///
    /// Propagates any [`ShippingError`] raised by the rule's per-line
    /// pass.
    pub fn calculate_shipping_with_rule(
        &self,
        basket: &mut Basket,
        rule: &dyn RuleCalculator,
    ) -> Result<Money, ShippingError> {
        let total = rule.apply(basket)?;
        tracing::debug!(
            lines = basket.line_items().len(),
            total = %total,
            "calculated basket shipping with rule",
        );
        Ok(total)
    }
}

/// The shared per-line pricing pass.
///
/// Quotes every line item via its strategy, records the quote onto the
/// line, and returns the sum of the quoted amounts.
pub(crate) fn price_line_items(basket: &mut Basket) -> Result<Money, ShippingError> {
    let mut total = Money::zero();
    for line_item in basket.line_items_mut() {
        let strategy = Arc::clone(line_item.shipping());
        let quote = strategy.quote(line_item)?;
        total += quote.amount();
        line_item.record_quote(quote);
    }
    Ok(total)
}

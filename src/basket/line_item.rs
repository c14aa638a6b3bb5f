//! Line item and basket entities.

use std::sync::Arc;

use crate::shipping::{ShippingQuote, ShippingStrategy};
use crate::simple_types::{LineItemId, Money, ProductId, Region, SupplierId};

/// One product entry in a basket awaiting a shipping-cost computation.
///
/// The shipping strategy is mandatory: a line item without one cannot be
/// constructed, so the "missing strategy" configuration error is rejected
/// by the type system rather than surfacing at calculation time.
///
/// The `shipping_amount` and `shipping_description` slots start out as
/// `None` and are filled in by the calculators; every calculation pass
/// overwrites them (they are never accumulated).
#[derive(Clone, Debug)]
pub struct LineItem {
    id: LineItemId,
    product_id: ProductId,
    amount: Money,
    supplier_id: SupplierId,
    delivery_region: Region,
    shipping: Arc<ShippingStrategy>,
    shipping_amount: Option<Money>,
    shipping_description: Option<String>,
}

impl LineItem {
    /// Creates a new line item with empty shipping annotations.
    ///
    /// # Arguments
    ///
    /// * `id` - Numeric identifier of the line
    /// * `product_id` - The product being bought
    /// * `amount` - The item price (not consumed by the shipping logic)
    /// * `supplier_id` - The supplier fulfilling the line
    /// * `delivery_region` - Destination zone
    /// * `shipping` - The shipping strategy pricing this line; share one
    ///   `Arc` between lines to express "the same shipping option"
    #[must_use]
    pub fn new(
        id: LineItemId,
        product_id: ProductId,
        amount: Money,
        supplier_id: SupplierId,
        delivery_region: Region,
        shipping: Arc<ShippingStrategy>,
    ) -> Self {
        Self {
            id,
            product_id,
            amount,
            supplier_id,
            delivery_region,
            shipping,
            shipping_amount: None,
            shipping_description: None,
        }
    }

    /// Returns the line item identifier.
    #[must_use]
    pub const fn id(&self) -> LineItemId {
        self.id
    }

    /// Returns the product identifier.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the item price.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the supplier identifier.
    #[must_use]
    pub const fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    /// Returns the delivery region.
    #[must_use]
    pub const fn delivery_region(&self) -> Region {
        self.delivery_region
    }

    /// Changes the delivery region.
    ///
    /// Existing shipping annotations are left in place until the next
    /// calculation pass overwrites them.
    pub fn set_delivery_region(&mut self, delivery_region: Region) {
        self.delivery_region = delivery_region;
    }

    /// Returns the shipping strategy pricing this line.
    #[must_use]
    pub fn shipping(&self) -> &Arc<ShippingStrategy> {
        &self.shipping
    }

    /// Returns the computed shipping amount, or `None` before the first
    /// calculation pass.
    #[must_use]
    pub const fn shipping_amount(&self) -> Option<Money> {
        self.shipping_amount
    }

    /// Returns the computed shipping description, or `None` before the
    /// first calculation pass.
    #[must_use]
    pub fn shipping_description(&self) -> Option<&str> {
        self.shipping_description.as_deref()
    }

    /// Records a freshly computed quote, replacing any previous one.
    pub(crate) fn record_quote(&mut self, quote: ShippingQuote) {
        self.shipping_amount = Some(quote.amount());
        self.shipping_description = Some(quote.into_description());
    }
}

/// An ordered collection of line items.
///
/// The `shipping` field is a caller-facing display slot (part of the
/// entity's public shape); the calculators return totals instead of
/// writing it.
#[derive(Clone, Debug, Default)]
pub struct Basket {
    line_items: Vec<LineItem>,
    shipping: Money,
}

impl Basket {
    /// Creates a basket from its line items.
    #[must_use]
    pub fn new(line_items: Vec<LineItem>) -> Self {
        Self {
            line_items,
            shipping: Money::zero(),
        }
    }

    /// Returns the line items in basket order.
    #[must_use]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Mutable access for the calculation pass.
    pub(crate) fn line_items_mut(&mut self) -> &mut [LineItem] {
        &mut self.line_items
    }

    /// Returns `true` when the basket holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Returns the stored display total.
    #[must_use]
    pub const fn shipping(&self) -> Money {
        self.shipping
    }

    /// Stores a display total on the basket.
    pub fn set_shipping(&mut self, shipping: Money) {
        self.shipping = shipping;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn test_line(region: Region, shipping: Arc<ShippingStrategy>) -> LineItem {
        LineItem::new(
            LineItemId::new(1),
            ProductId::create("P1").unwrap(),
            Money::from_decimal(Decimal::from(20)),
            SupplierId::new(1),
            region,
            shipping,
        )
    }

    #[rstest]
    fn annotations_start_empty() {
        let strategy = Arc::new(ShippingStrategy::flat_rate(Money::zero()));
        let line = test_line(Region::Uk, strategy);

        assert!(line.shipping_amount().is_none());
        assert!(line.shipping_description().is_none());
    }

    #[rstest]
    fn record_quote_overwrites_previous_annotation() {
        let strategy = Arc::new(ShippingStrategy::flat_rate(Money::zero()));
        let mut line = test_line(Region::Uk, strategy);

        line.record_quote(ShippingQuote::new(
            Money::from_decimal(Decimal::ONE),
            "first".to_string(),
        ));
        line.record_quote(ShippingQuote::new(
            Money::from_decimal(Decimal::TWO),
            "second".to_string(),
        ));

        assert_eq!(line.shipping_amount(), Some(Money::from_decimal(Decimal::TWO)));
        assert_eq!(line.shipping_description(), Some("second"));
    }

    #[rstest]
    fn shared_strategy_is_the_same_instance() {
        let strategy = Arc::new(ShippingStrategy::flat_rate(Money::zero()));
        let first = test_line(Region::Uk, Arc::clone(&strategy));
        let second = test_line(Region::Europe, Arc::clone(&strategy));

        assert_eq!(first.shipping().id(), second.shipping().id());
    }

    #[rstest]
    fn basket_display_total_is_caller_owned() {
        let strategy = Arc::new(ShippingStrategy::flat_rate(Money::zero()));
        let mut basket = Basket::new(vec![test_line(Region::Uk, strategy)]);

        assert!(basket.shipping().is_zero());
        basket.set_shipping(Money::from_decimal(Decimal::from(5)));
        assert_eq!(basket.shipping(), Money::from_decimal(Decimal::from(5)));
    }

    #[rstest]
    fn empty_basket_reports_empty() {
        assert!(Basket::new(vec![]).is_empty());
        assert!(Basket::default().is_empty());
    }
}

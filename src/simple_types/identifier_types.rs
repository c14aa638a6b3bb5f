//! Identifier type definitions.
//!
//! Defines `ProductId`, `SupplierId`, `LineItemId` and `StrategyId`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

// =============================================================================
// ProductId
// =============================================================================

/// Maximum character count for `ProductId`.
const PRODUCT_ID_MAX_LENGTH: usize = 50;

/// An opaque identifier naming the product on a basket line.
///
/// A non-empty string of 50 characters or fewer. Informational only: the
/// shipping computation never inspects it.
///
/// # Examples
///
/// ```
/// use marketplace_shipping::simple_types::ProductId;
///
/// let product_id = ProductId::create("P1").unwrap();
/// assert_eq!(product_id.value(), "P1");
///
/// // Empty string causes an error
/// assert!(ProductId::create("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds 50
    /// characters.
    pub fn create(value: &str) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::new("ProductId", "must not be empty"));
        }
        if value.chars().count() > PRODUCT_ID_MAX_LENGTH {
            return Err(ValidationError::new(
                "ProductId",
                "must not exceed 50 characters",
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns a reference to the inner identifier string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// SupplierId
// =============================================================================

/// Identifies the supplier (vendor) fulfilling a basket line.
///
/// Used by discount rules as part of the consolidation grouping key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(u32);

impl SupplierId {
    /// Creates a new `SupplierId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the inner numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// LineItemId
// =============================================================================

/// Numeric identifier of a basket line item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(u32);

impl LineItemId {
    /// Creates a new `LineItemId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the inner numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// StrategyId
// =============================================================================

/// Counter backing [`StrategyId::next`]. Never reset.
static NEXT_STRATEGY_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a configured shipping strategy instance.
///
/// Every constructed strategy receives a fresh id from a process-wide
/// counter, so two strategies are "the same" exactly when line items share
/// one instance. Discount rules group on this id instead of deriving a
/// hash from the strategy's configuration, which keeps grouping
/// deterministic and collision-free: value-equal rate tables built
/// separately never merge into one group.
///
/// # Examples
///
/// ```
/// use marketplace_shipping::shipping::ShippingStrategy;
/// use marketplace_shipping::simple_types::Money;
/// use rust_decimal::Decimal;
///
/// let rate = Money::from_decimal(Decimal::ONE);
/// let a = ShippingStrategy::flat_rate(rate);
/// let b = ShippingStrategy::flat_rate(rate);
/// assert_ne!(a.id(), b.id());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyId(u64);

impl StrategyId {
    /// Allocates the next process-unique strategy id.
    pub(crate) fn next() -> Self {
        Self(NEXT_STRATEGY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the inner numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // ProductId
    // =========================================================================

    #[rstest]
    #[case("P1")]
    #[case("widget-0042")]
    fn product_id_accepts_non_empty_strings(#[case] value: &str) {
        let product_id = ProductId::create(value).unwrap();
        assert_eq!(product_id.value(), value);
    }

    #[rstest]
    fn product_id_rejects_empty_string() {
        let error = ProductId::create("").unwrap_err();
        assert_eq!(error.field_name, "ProductId");
    }

    #[rstest]
    fn product_id_rejects_overlong_string() {
        let value = "x".repeat(51);
        assert!(ProductId::create(&value).is_err());
    }

    #[rstest]
    fn product_id_accepts_max_length_string() {
        let value = "x".repeat(50);
        assert!(ProductId::create(&value).is_ok());
    }

    // =========================================================================
    // SupplierId / LineItemId
    // =========================================================================

    #[rstest]
    fn supplier_id_roundtrips_value() {
        assert_eq!(SupplierId::new(7).value(), 7);
    }

    #[rstest]
    fn line_item_id_roundtrips_value() {
        assert_eq!(LineItemId::new(99).value(), 99);
    }

    #[rstest]
    fn supplier_id_display_shows_number() {
        assert_eq!(SupplierId::new(3).to_string(), "3");
    }

    // =========================================================================
    // StrategyId
    // =========================================================================

    #[rstest]
    fn next_allocates_distinct_ids() {
        let first = StrategyId::next();
        let second = StrategyId::next();
        assert_ne!(first, second);
    }

    #[rstest]
    fn copies_of_one_id_compare_equal() {
        let id = StrategyId::next();
        let copy = id;
        assert_eq!(id, copy);
    }
}

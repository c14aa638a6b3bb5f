//! Shipping strategies.
//!
//! A [`ShippingStrategy`] prices the delivery of one line item and
//! describes the chosen tariff. Three variants exist:
//!
//! - **Flat rate**: one configured amount, whatever the destination.
//! - **Per region (legacy)**: first matching entry of a region rate
//!   table; a missing region silently prices as zero. The tolerance is a
//!   long-standing behaviour existing callers rely on, so it is preserved
//!   as-is rather than fixed.
//! - **Per region (corrected)**: same table shape, but a missing region
//!   is a hard configuration error. Callers supply full coverage,
//!   including a `RestOfTheWorld` catch-all entry.
//!
//! Strategies are stateless after construction and safe to share between
//! line items and baskets; sharing one instance (via `Arc`) is how
//! callers express "the same shipping option" to the discount rules.

use serde::{Deserialize, Serialize};

use super::error::ShippingError;
use crate::basket::LineItem;
use crate::simple_types::{Money, Region, StrategyId};

/// Description attached to every flat-rate quote.
const FLAT_RATE_DESCRIPTION: &str = "Flat Rate";

// =============================================================================
// RegionRate
// =============================================================================

/// One entry of a per-region rate table.
///
/// # Examples
///
/// ```
/// use marketplace_shipping::shipping::RegionRate;
/// use marketplace_shipping::simple_types::{Money, Region};
/// use rust_decimal::Decimal;
///
/// let rate = RegionRate::new(Region::Uk, Money::from_decimal(Decimal::new(75, 2)));
/// assert!(rate.region().is_uk());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRate {
    region: Region,
    amount: Money,
}

impl RegionRate {
    /// Creates a rate table entry.
    #[must_use]
    pub const fn new(region: Region, amount: Money) -> Self {
        Self { region, amount }
    }

    /// Returns the destination region of this entry.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the shipping amount charged for this entry.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }
}

// =============================================================================
// ShippingQuote
// =============================================================================

/// The explicit result of pricing one line item: the amount to charge and
/// a human-readable description for receipts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    amount: Money,
    description: String,
}

impl ShippingQuote {
    /// Creates a quote from its parts.
    #[must_use]
    pub const fn new(amount: Money, description: String) -> Self {
        Self {
            amount,
            description,
        }
    }

    /// Returns the quoted amount.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the quoted description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consumes the quote, returning the description.
    #[must_use]
    pub fn into_description(self) -> String {
        self.description
    }
}

// =============================================================================
// ShippingStrategy
// =============================================================================

/// The pricing configuration of a strategy.
#[derive(Clone, Debug)]
enum StrategyKind {
    /// Fixed amount regardless of destination.
    FlatRate { rate: Money },
    /// Legacy per-region table: missing regions price as zero.
    PerRegion { rates: Vec<RegionRate> },
    /// Corrected per-region table: missing regions are an error.
    NewPerRegion { rates: Vec<RegionRate> },
}

/// A pluggable shipping pricing rule for a line item.
///
/// Every constructed strategy carries a process-unique [`StrategyId`];
/// discount rules group line items on that id, so identity means "shares
/// the same constructed instance", never "has an equal configuration".
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use marketplace_shipping::basket::LineItem;
/// use marketplace_shipping::shipping::ShippingStrategy;
/// use marketplace_shipping::simple_types::{
///     LineItemId, Money, ProductId, Region, SupplierId,
/// };
/// use rust_decimal::Decimal;
///
/// let flat = Arc::new(ShippingStrategy::flat_rate(Money::from_decimal(Decimal::new(
///     150, 2,
/// ))));
/// let line = LineItem::new(
///     LineItemId::new(1),
///     ProductId::create("P1").unwrap(),
///     Money::zero(),
///     SupplierId::new(1),
///     Region::Uk,
///     Arc::clone(&flat),
/// );
///
/// let amount = flat.amount(&line).unwrap();
/// assert_eq!(amount, Money::from_decimal(Decimal::new(150, 2)));
/// assert_eq!(flat.description(&line), "Flat Rate");
/// ```
#[derive(Clone, Debug)]
pub struct ShippingStrategy {
    id: StrategyId,
    kind: StrategyKind,
}

impl ShippingStrategy {
    /// Creates a flat-rate strategy charging `rate` for every line item.
    #[must_use]
    pub fn flat_rate(rate: Money) -> Self {
        Self {
            id: StrategyId::next(),
            kind: StrategyKind::FlatRate { rate },
        }
    }

    /// Creates a legacy per-region strategy.
    ///
    /// Lookups use the first entry matching the delivery region; a region
    /// absent from the table prices as zero rather than failing.
    #[must_use]
    pub fn per_region(rates: Vec<RegionRate>) -> Self {
        Self {
            id: StrategyId::next(),
            kind: StrategyKind::PerRegion { rates },
        }
    }

    /// Creates a corrected per-region strategy.
    ///
    /// Lookups return the entry matching the delivery region exactly; a
    /// region absent from the table is a configuration error surfaced as
    /// [`ShippingError::RegionNotCovered`].
    #[must_use]
    pub fn new_per_region(rates: Vec<RegionRate>) -> Self {
        Self {
            id: StrategyId::next(),
            kind: StrategyKind::NewPerRegion { rates },
        }
    }

    /// Returns the identity of this configured instance.
    #[must_use]
    pub const fn id(&self) -> StrategyId {
        self.id
    }

    /// Prices the delivery of `line_item`.
    ///
    /// Pure: depends only on the configuration and the line's delivery
    /// region, and mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError::RegionNotCovered`] when a corrected
    /// per-region strategy has no entry for the line's delivery region.
    pub fn amount(&self, line_item: &LineItem) -> Result<Money, ShippingError> {
        let region = line_item.delivery_region();
        match &self.kind {
            StrategyKind::FlatRate { rate } => Ok(*rate),
            StrategyKind::PerRegion { rates } => {
                Ok(first_match(rates, region).map_or_else(Money::zero, RegionRate::amount))
            }
            StrategyKind::NewPerRegion { rates } => first_match(rates, region)
                .map(RegionRate::amount)
                .ok_or(ShippingError::RegionNotCovered {
                    strategy: self.id,
                    region,
                }),
        }
    }

    /// Describes the tariff applied to `line_item`.
    ///
    /// Per-region variants name the matched region; an unmatched region
    /// yields an empty description, consistent with the legacy amount
    /// tolerance.
    #[must_use]
    pub fn description(&self, line_item: &LineItem) -> String {
        let region = line_item.delivery_region();
        match &self.kind {
            StrategyKind::FlatRate { .. } => FLAT_RATE_DESCRIPTION.to_string(),
            StrategyKind::PerRegion { rates } | StrategyKind::NewPerRegion { rates } => {
                first_match(rates, region).map_or_else(String::new, |rate| {
                    format!("Shipping to {}", rate.region())
                })
            }
        }
    }

    /// Prices and describes `line_item` in one pass.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`ShippingStrategy::amount`].
    pub fn quote(&self, line_item: &LineItem) -> Result<ShippingQuote, ShippingError> {
        let amount = self.amount(line_item)?;
        Ok(ShippingQuote::new(amount, self.description(line_item)))
    }
}

/// First-match lookup over a rate table.
fn first_match(rates: &[RegionRate], region: Region) -> Option<&RegionRate> {
    rates.iter().find(|rate| rate.region() == region)
}

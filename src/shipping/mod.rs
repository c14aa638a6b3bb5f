//! Shipping cost computation.
//!
//! The core of the crate: pluggable per-line [`ShippingStrategy`]
//! pricing, the basket-level [`ShippingCalculator`], and the
//! [`RuleCalculator`] discount layer applied over the aggregate.

mod calculator;
mod error;
mod rules;
mod strategy;

pub use calculator::ShippingCalculator;
pub use error::ShippingError;
pub use rules::{RuleCalculator, SameShippingOptionSupplierAndRegionRule};
pub use strategy::{RegionRate, ShippingQuote, ShippingStrategy};

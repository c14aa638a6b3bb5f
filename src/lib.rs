//! # Marketplace Shipping
//!
//! Shipping cost calculation for marketplace shopping baskets.
//!
//! ## Overview
//!
//! A basket is an ordered collection of line items, each referencing a
//! shipping option that prices its delivery: a flat rate, or a per-region
//! rate table (in a legacy lenient flavour and a corrected strict one).
//! The calculator prices every line, annotates it with the amount and a
//! human-readable description, and returns the exact decimal total.
//! Discount rules can post-process the aggregate, for example deducting a
//! fixed amount when several items from the same supplier ship to the same
//! region under the same shipping option.
//!
//! All monetary arithmetic uses [`rust_decimal::Decimal`]; binary floating
//! point never enters the computation.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained primitive types (`Money`, `Region`,
//!   `ProductId`, `SupplierId`, `StrategyId`, etc.)
//! - `basket`: The `Basket` and `LineItem` entities
//! - `shipping`: Shipping strategies, the calculator, and discount rules
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use marketplace_shipping::basket::{Basket, LineItem};
//! use marketplace_shipping::shipping::{RegionRate, ShippingCalculator, ShippingStrategy};
//! use marketplace_shipping::simple_types::{
//!     LineItemId, Money, ProductId, Region, SupplierId,
//! };
//! use rust_decimal::Decimal;
//!
//! let per_region = Arc::new(ShippingStrategy::per_region(vec![
//!     RegionRate::new(Region::Uk, Money::from_decimal(Decimal::new(75, 2))),
//!     RegionRate::new(Region::Europe, Money::from_decimal(Decimal::new(150, 2))),
//! ]));
//!
//! let mut basket = Basket::new(vec![LineItem::new(
//!     LineItemId::new(1),
//!     ProductId::create("P1").unwrap(),
//!     Money::zero(),
//!     SupplierId::new(1),
//!     Region::Uk,
//!     Arc::clone(&per_region),
//! )]);
//!
//! let total = ShippingCalculator::new().calculate_shipping(&mut basket).unwrap();
//! assert_eq!(total, Money::from_decimal(Decimal::new(75, 2)));
//! ```

#![forbid(unsafe_code)]

pub mod basket;
pub mod shipping;
pub mod simple_types;

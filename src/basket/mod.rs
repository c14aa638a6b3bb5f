//! Basket entities.
//!
//! A [`Basket`] owns an ordered sequence of [`LineItem`]s awaiting a
//! shipping computation. Line items reference their shipping strategy via
//! `Arc`, so several lines can share one configured strategy instance;
//! the discount rules rely on that shared identity.

mod line_item;

pub use line_item::{Basket, LineItem};

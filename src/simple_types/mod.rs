//! Constrained primitive types for the basket shipping domain.
//!
//! Each type wraps a raw value in a newtype so that illegal states stay
//! unrepresentable: identifiers cannot be empty, money is always an exact
//! decimal, and delivery regions form a closed set. Validating types use
//! the smart-constructor pattern (`create` returns `Result`); trivially
//! valid newtypes expose a plain `new`.
//!
//! # Type categories
//!
//! - **Identifier types**: [`ProductId`], [`SupplierId`], [`LineItemId`],
//!   [`StrategyId`]
//! - **Money type**: [`Money`]
//! - **Region type**: [`Region`]

mod error;
mod identifier_types;
mod money_types;
mod region_types;

pub use error::ValidationError;
pub use identifier_types::{LineItemId, ProductId, StrategyId, SupplierId};
pub use money_types::Money;
pub use region_types::Region;

//! Delivery region type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery destination zone.
///
/// The set is closed: per-region rate tables enumerate entries for these
/// zones, with [`RestOfTheWorld`](Region::RestOfTheWorld) acting as the
/// explicitly configured catch-all destination.
///
/// # Examples
///
/// ```
/// use marketplace_shipping::simple_types::Region;
///
/// let region = Region::Uk;
/// assert!(region.is_uk());
/// assert_eq!(region.to_string(), "UK");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United Kingdom.
    Uk,
    /// Continental Europe.
    Europe,
    /// Any destination outside the named zones.
    RestOfTheWorld,
}

impl Region {
    /// All delivery regions, in tariff order.
    pub const ALL: [Self; 3] = [Self::Uk, Self::Europe, Self::RestOfTheWorld];

    /// Returns `true` for the `Uk` variant.
    #[must_use]
    pub const fn is_uk(&self) -> bool {
        matches!(self, Self::Uk)
    }

    /// Returns `true` for the `Europe` variant.
    #[must_use]
    pub const fn is_europe(&self) -> bool {
        matches!(self, Self::Europe)
    }

    /// Returns `true` for the `RestOfTheWorld` variant.
    #[must_use]
    pub const fn is_rest_of_the_world(&self) -> bool {
        matches!(self, Self::RestOfTheWorld)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uk => write!(formatter, "UK"),
            Self::Europe => write!(formatter, "Europe"),
            Self::RestOfTheWorld => write!(formatter, "Rest of the World"),
        }
    }
}

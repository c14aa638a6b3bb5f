//! Shipping computation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simple_types::{Region, StrategyId};

/// Errors raised while pricing a basket.
///
/// All variants are configuration errors: the computation itself is a
/// deterministic pure function with no transient failure modes, so
/// nothing here is retryable.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ShippingError {
    /// A corrected per-region strategy has no rate entry for a line's
    /// delivery region. Callers are expected to configure full coverage,
    /// including a `RestOfTheWorld` catch-all entry; failing loudly here
    /// is what distinguishes the corrected lookup from the legacy one,
    /// which silently charges zero instead.
    #[error("no shipping rate configured for {region} (strategy {strategy})")]
    RegionNotCovered {
        /// Identity of the misconfigured strategy.
        strategy: StrategyId,
        /// The uncovered delivery region.
        region: Region,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_names_the_uncovered_region() {
        let error = ShippingError::RegionNotCovered {
            strategy: StrategyId::next(),
            region: Region::Europe,
        };

        assert!(error.to_string().contains("Europe"));
    }
}

//! Validation error type shared by the constrained simple types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by the smart constructors of the simple types.
///
/// Carries the name of the offending field together with a message
/// describing the violated constraint.
///
/// # Examples
///
/// ```
/// use marketplace_shipping::simple_types::ValidationError;
///
/// let error = ValidationError::new("ProductId", "must not be empty");
/// assert_eq!(error.to_string(), "ProductId: must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field that failed validation.
    pub field_name: String,
    /// Description of the violated constraint.
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}

//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Every variant is scoped to a single request or checkout attempt and is
/// reported synchronously to the immediate caller.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Input rejected before any computation (postal code, parcel bounds,
    /// option values). Recoverable by correcting the input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Checkout is missing a required selection.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

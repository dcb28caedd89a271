//! Selected shipping quote.

use crate::money::Money;
use crate::shipping::{ServiceTier, ShippingQuote};
use serde::{Deserialize, Serialize};

/// The shipping quote chosen by the customer, carried by value from
/// estimation into checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingSelection {
    /// Selected tier.
    pub tier: ServiceTier,
    /// Carrier service code (denormalized).
    pub service_code: String,
    /// Carrier service name (denormalized).
    pub service_name: String,
    /// Quoted price.
    pub price: Money,
    /// Estimated delivery days.
    pub delivery_days: u32,
}

impl ShippingSelection {
    /// Create from an estimator quote.
    pub fn from_quote(quote: &ShippingQuote) -> Self {
        Self {
            tier: quote.tier,
            service_code: quote.service_code.clone(),
            service_name: quote.service_name.clone(),
            price: quote.price,
            delivery_days: quote.delivery_days,
        }
    }
}

//! Shipping service tiers and quotes.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceTier {
    /// Economy service (Correios PAC).
    #[default]
    Standard,
    /// Premium service (Correios SEDEX).
    Express,
}

impl ServiceTier {
    /// All tiers, in the stable order quotes are returned.
    pub const ALL: [ServiceTier; 2] = [ServiceTier::Standard, ServiceTier::Express];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "standard",
            ServiceTier::Express => "express",
        }
    }

    /// Carrier service code.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "04510",
            ServiceTier::Express => "04014",
        }
    }

    /// Carrier service display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "PAC",
            ServiceTier::Express => "SEDEX",
        }
    }

    /// Whether the service delivers to the customer's door.
    pub fn home_delivery(&self) -> bool {
        true
    }

    /// Whether the service delivers on Saturdays.
    pub fn saturday_delivery(&self) -> bool {
        matches!(self, ServiceTier::Express)
    }
}

/// Display name for a carrier service code, covering codes beyond the two
/// quoted tiers.
pub fn service_name_for_code(code: &str) -> String {
    match code {
        "04510" => "PAC".to_string(),
        "04014" => "SEDEX".to_string(),
        "40215" => "SEDEX 10".to_string(),
        "40290" | "04804" => "SEDEX Hoje".to_string(),
        other => format!("Service {other}"),
    }
}

/// One priced, timed shipping-service offer.
///
/// Produced fresh per estimation call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingQuote {
    /// Service tier.
    pub tier: ServiceTier,
    /// Carrier service code (denormalized).
    pub service_code: String,
    /// Carrier service name (denormalized).
    pub service_name: String,
    /// Quoted price.
    pub price: Money,
    /// Estimated delivery days.
    pub delivery_days: u32,
    /// Door-to-door delivery available.
    pub home_delivery: bool,
    /// Saturday delivery available.
    pub saturday_delivery: bool,
}

impl ShippingQuote {
    /// Delivery estimate string, e.g. "4 days".
    pub fn delivery_estimate(&self) -> String {
        if self.delivery_days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.delivery_days)
        }
    }
}

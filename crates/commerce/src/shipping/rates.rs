//! Rate policy for the simulated carrier quotes.
//!
//! The constants are simulation policy, not a carrier contract: only the
//! shape of the formula (base + distance + weight + volume terms) and the
//! delivery-day clamps are load-bearing.

use crate::shipping::ServiceTier;
use serde::{Deserialize, Serialize};

/// Pricing and delivery-time policy for one service tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Flat base rate.
    pub base: f64,
    /// Rate per unit of the postal-prefix distance proxy.
    pub per_distance: f64,
    /// Rate per kilogram.
    pub per_kg: f64,
    /// Rate per cubic centimeter.
    pub per_cubic_cm: f64,
    /// Distance units per extra delivery day.
    pub days_divisor: u32,
    /// Delivery days added on top of the distance term.
    pub days_offset: u32,
    /// Lower clamp on estimated delivery days.
    pub min_days: u32,
    /// Upper clamp on estimated delivery days.
    pub max_days: u32,
}

impl RateCard {
    /// Quote price: linear combination of distance, weight and volume on
    /// top of the base rate.
    pub fn price(&self, distance: u32, weight_kg: f64, volume_cubic_cm: f64) -> f64 {
        self.base
            + self.per_distance * f64::from(distance)
            + self.per_kg * weight_kg
            + self.per_cubic_cm * volume_cubic_cm
    }

    /// Estimated delivery days: a step function of distance, clamped to
    /// the tier's range.
    pub fn delivery_days(&self, distance: u32) -> u32 {
        (distance / self.days_divisor + self.days_offset).clamp(self.min_days, self.max_days)
    }
}

/// Rate policy for both service tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Standard (PAC) rates.
    pub standard: RateCard,
    /// Express (SEDEX) rates.
    pub express: RateCard,
}

impl RateTable {
    /// The rate card for a tier.
    pub fn card(&self, tier: ServiceTier) -> &RateCard {
        match tier {
            ServiceTier::Standard => &self.standard,
            ServiceTier::Express => &self.express,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            standard: RateCard {
                base: 15.0,
                per_distance: 0.02,
                per_kg: 5.0,
                per_cubic_cm: 0.000_025,
                days_divisor: 100,
                days_offset: 3,
                min_days: 3,
                max_days: 15,
            },
            express: RateCard {
                base: 25.0,
                per_distance: 0.04,
                per_kg: 7.5,
                per_cubic_cm: 0.000_05,
                days_divisor: 300,
                days_offset: 1,
                min_days: 1,
                max_days: 5,
            },
        }
    }
}

//! Shipping estimation module.
//!
//! Contains postal-code handling, parcel validation, the rate policy and
//! the simulated carrier estimator with its lifecycle events.

mod cep;
mod estimator;
mod lifecycle;
mod parcel;
mod quote;
mod rates;

pub use cep::Cep;
pub use estimator::ShippingEstimator;
pub use lifecycle::{EstimateEvent, EstimateObserver};
pub use parcel::{
    ParcelSpec, HEIGHT_RANGE_CM, LENGTH_RANGE_CM, MAX_DIMENSION_SUM_CM, MAX_WEIGHT_KG,
    WIDTH_RANGE_CM,
};
pub use quote::{service_name_for_code, ServiceTier, ShippingQuote};
pub use rates::{RateCard, RateTable};

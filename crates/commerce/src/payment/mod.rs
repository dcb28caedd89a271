//! Payment handoff module.
//!
//! Simulated payment-provider gateway producing opaque reference tokens.

mod preference;

pub use preference::{BackUrls, PaymentGateway, PaymentItem, PaymentPreference, PaymentShipment};

//! Observability for the Animatoon storefront.
//!
//! This crate provides:
//! - `RequestId` - Unique request identifier for log correlation
//! - `StructuredLogger` - Structured logging with request context
//! - `QuoteLogObserver` - Shipping-estimate lifecycle logging

mod logging;
mod observer;

pub use logging::*;
pub use observer::*;

//! Estimate lifecycle events.
//!
//! The estimator publishes its lifecycle to registered observers, keeping
//! callers decoupled from any UI toolkit.

use crate::shipping::ShippingQuote;
use std::time::Duration;

/// Lifecycle events published during a shipping estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateEvent {
    /// Estimation started; input not yet validated.
    Started,
    /// Estimation finished with quotes.
    Succeeded { quotes: Vec<ShippingQuote> },
    /// Estimation failed before producing any quote.
    Failed { reason: String },
}

/// Observer for estimate lifecycle events.
pub trait EstimateObserver: Send + Sync {
    /// Called for each lifecycle event, with the time elapsed since the
    /// estimation call began.
    fn on_event(&self, event: &EstimateEvent, elapsed: Duration);
}

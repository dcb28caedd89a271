//! Log-emitting estimate observer.

use std::time::Duration;

use animatoon_commerce::shipping::{EstimateEvent, EstimateObserver};

use crate::logging::StructuredLogger;

/// Publishes shipping-estimate lifecycle events to the structured log.
///
/// Subscribe an instance to a `ShippingEstimator` to get one log line per
/// lifecycle event, correlated by the logger's request ID.
pub struct QuoteLogObserver {
    logger: StructuredLogger,
}

impl QuoteLogObserver {
    /// Create an observer writing through the given logger.
    pub fn new(logger: StructuredLogger) -> Self {
        Self { logger }
    }
}

impl EstimateObserver for QuoteLogObserver {
    fn on_event(&self, event: &EstimateEvent, elapsed: Duration) {
        match event {
            EstimateEvent::Started => self.logger.debug("shipping estimate started"),
            EstimateEvent::Succeeded { quotes } => {
                let mut builder = self
                    .logger
                    .info_builder("shipping estimate succeeded")
                    .field_i64("quotes", quotes.len() as i64)
                    .duration_ms("elapsed", elapsed);
                for quote in quotes {
                    builder = builder.field(quote.tier.as_str(), quote.price.display_amount());
                }
                builder.emit();
            }
            EstimateEvent::Failed { reason } => {
                self.logger
                    .warn_builder("shipping estimate failed")
                    .field("reason", reason.clone())
                    .duration_ms("elapsed", elapsed)
                    .emit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogFormat, RequestId};
    use animatoon_commerce::shipping::{ParcelSpec, RateTable, ShippingEstimator};
    use std::sync::Arc;

    fn observer() -> Arc<QuoteLogObserver> {
        let logger = StructuredLogger::new(RequestId::generate())
            .with_component("shipping")
            .with_format(LogFormat::Human);
        Arc::new(QuoteLogObserver::new(logger))
    }

    #[tokio::test]
    async fn test_logs_successful_estimate() {
        let mut estimator =
            ShippingEstimator::new(RateTable::default()).with_latency(Duration::ZERO);
        estimator.subscribe(observer());

        let parcel = ParcelSpec::new(0.5, 20.0, 15.0, 10.0);
        let quotes = estimator
            .estimate("01310-100", "20040-020", &parcel)
            .await
            .unwrap();
        assert_eq!(quotes.len(), 2);
    }

    #[tokio::test]
    async fn test_logs_failed_estimate() {
        let mut estimator =
            ShippingEstimator::new(RateTable::default()).with_latency(Duration::ZERO);
        estimator.subscribe(observer());

        let parcel = ParcelSpec::new(31.0, 20.0, 15.0, 10.0);
        let result = estimator.estimate("01310-100", "20040-020", &parcel).await;
        assert!(result.is_err());
    }
}

//! Shipping cost estimator.
//!
//! Simulates a carrier quote call: validates the input, suspends once for a
//! configurable latency standing in for the network round trip, then prices
//! each service tier from the rate table.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::shipping::{
    Cep, EstimateEvent, EstimateObserver, ParcelSpec, RateTable, ServiceTier, ShippingQuote,
};

/// Default simulated carrier latency.
const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Quotes shipping services for a parcel between two postal codes.
///
/// Estimation holds no shared mutable state; `estimate` takes `&self` and
/// may be invoked concurrently for different inputs.
pub struct ShippingEstimator {
    rates: RateTable,
    currency: Currency,
    latency: Duration,
    observers: Vec<Arc<dyn EstimateObserver>>,
}

impl ShippingEstimator {
    /// Create an estimator with the given rate policy.
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            currency: Currency::default(),
            latency: DEFAULT_LATENCY,
            observers: Vec::new(),
        }
    }

    /// Set the simulated carrier latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set the currency quotes are priced in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Register an observer for estimate lifecycle events.
    pub fn subscribe(&mut self, observer: Arc<dyn EstimateObserver>) {
        self.observers.push(observer);
    }

    /// Quote every service tier for a parcel between two postal codes.
    ///
    /// Validation runs before the simulated latency, in a fixed order:
    /// origin code, destination code, then the parcel bounds. Any failure
    /// is returned synchronously and no quote is produced. On success the
    /// quotes come back in stable tier order, standard before express.
    pub async fn estimate(
        &self,
        origin: &str,
        destination: &str,
        parcel: &ParcelSpec,
    ) -> Result<Vec<ShippingQuote>, CommerceError> {
        let started = Instant::now();
        self.publish(&EstimateEvent::Started, started);

        let (origin, destination) = match self.validate(origin, destination, parcel) {
            Ok(codes) => codes,
            Err(err) => {
                self.publish(
                    &EstimateEvent::Failed {
                        reason: err.to_string(),
                    },
                    started,
                );
                return Err(err);
            }
        };

        // Single suspend-and-resume standing in for the carrier round trip.
        tokio::time::sleep(self.latency).await;

        let distance = origin.distance_to(&destination);
        let weight = parcel.weight_kg;
        let volume = parcel.volume_cubic_cm();

        let quotes: Vec<ShippingQuote> = ServiceTier::ALL
            .iter()
            .map(|&tier| self.quote(tier, distance, weight, volume))
            .collect();

        self.publish(
            &EstimateEvent::Succeeded {
                quotes: quotes.clone(),
            },
            started,
        );
        Ok(quotes)
    }

    fn validate(
        &self,
        origin: &str,
        destination: &str,
        parcel: &ParcelSpec,
    ) -> Result<(Cep, Cep), CommerceError> {
        let origin = Cep::parse(origin).map_err(|_| {
            CommerceError::Validation(format!("invalid origin postal code: {origin:?}"))
        })?;
        let destination = Cep::parse(destination).map_err(|_| {
            CommerceError::Validation(format!("invalid destination postal code: {destination:?}"))
        })?;
        parcel.validate()?;
        Ok((origin, destination))
    }

    fn quote(&self, tier: ServiceTier, distance: u32, weight_kg: f64, volume: f64) -> ShippingQuote {
        let card = self.rates.card(tier);
        ShippingQuote {
            tier,
            service_code: tier.code().to_string(),
            service_name: tier.display_name().to_string(),
            price: Money::from_decimal(card.price(distance, weight_kg, volume), self.currency),
            delivery_days: card.delivery_days(distance),
            home_delivery: tier.home_delivery(),
            saturday_delivery: tier.saturday_delivery(),
        }
    }

    fn publish(&self, event: &EstimateEvent, started: Instant) {
        let elapsed = started.elapsed();
        for observer in &self.observers {
            observer.on_event(event, elapsed);
        }
    }
}

impl Default for ShippingEstimator {
    fn default() -> Self {
        Self::new(RateTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn estimator() -> ShippingEstimator {
        ShippingEstimator::new(RateTable::default()).with_latency(Duration::ZERO)
    }

    fn parcel() -> ParcelSpec {
        ParcelSpec::new(0.5, 20.0, 15.0, 10.0)
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<EstimateEvent>>,
    }

    impl EstimateObserver for Recorder {
        fn on_event(&self, event: &EstimateEvent, _elapsed: Duration) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[tokio::test]
    async fn test_estimate_returns_both_tiers_in_order() {
        let quotes = estimator()
            .estimate("01310-100", "20040-020", &parcel())
            .await
            .unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].tier, ServiceTier::Standard);
        assert_eq!(quotes[0].service_name, "PAC");
        assert_eq!(quotes[1].tier, ServiceTier::Express);
        assert_eq!(quotes[1].service_name, "SEDEX");
        assert!(quotes.iter().all(|q| q.price.is_positive()));
    }

    #[tokio::test]
    async fn test_prices_follow_the_rate_table() {
        let rates = RateTable::default();
        let quotes = estimator()
            .estimate("01310-100", "20040-020", &parcel())
            .await
            .unwrap();

        // Expectations recomputed from the table, not hardcoded: the
        // constants are policy, the formula shape is the contract.
        let distance = 187;
        let volume = 3000.0;
        let expected_standard =
            Money::from_decimal(rates.standard.price(distance, 0.5, volume), Currency::BRL);
        let expected_express =
            Money::from_decimal(rates.express.price(distance, 0.5, volume), Currency::BRL);

        assert_eq!(quotes[0].price, expected_standard);
        assert_eq!(quotes[1].price, expected_express);
        assert_eq!(quotes[0].delivery_days, rates.standard.delivery_days(distance));
        assert_eq!(quotes[1].delivery_days, rates.express.delivery_days(distance));
    }

    #[tokio::test]
    async fn test_days_stay_within_tier_clamps() {
        // Maximal prefix distance
        let quotes = estimator()
            .estimate("00000-000", "99999-999", &parcel())
            .await
            .unwrap();

        assert!(quotes[0].delivery_days >= 3 && quotes[0].delivery_days <= 15);
        assert!(quotes[1].delivery_days >= 1 && quotes[1].delivery_days <= 5);
    }

    #[tokio::test]
    async fn test_tier_flags() {
        let quotes = estimator()
            .estimate("01310-100", "20040-020", &parcel())
            .await
            .unwrap();

        assert!(quotes[0].home_delivery);
        assert!(!quotes[0].saturday_delivery);
        assert!(quotes[1].home_delivery);
        assert!(quotes[1].saturday_delivery);
    }

    #[tokio::test]
    async fn test_invalid_origin_rejected_first() {
        let err = estimator()
            .estimate("123", "20040-020", &parcel())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("origin"));
    }

    #[tokio::test]
    async fn test_invalid_destination_rejected() {
        let err = estimator()
            .estimate("01310-100", "abc", &parcel())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("destination"));
    }

    #[tokio::test]
    async fn test_invalid_parcel_rejected() {
        let mut bad = parcel();
        bad.weight_kg = 31.0;
        let err = estimator()
            .estimate("01310-100", "20040-020", &bad)
            .await
            .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_observer_sees_start_then_success() {
        let recorder = Arc::new(Recorder::default());
        let mut estimator = estimator();
        estimator.subscribe(recorder.clone());

        estimator
            .estimate("01310-100", "20040-020", &parcel())
            .await
            .unwrap();

        let events = recorder.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], EstimateEvent::Started);
        assert!(matches!(events[1], EstimateEvent::Succeeded { ref quotes } if quotes.len() == 2));
    }

    #[tokio::test]
    async fn test_observer_sees_failure_reason() {
        let recorder = Arc::new(Recorder::default());
        let mut estimator = estimator();
        estimator.subscribe(recorder.clone());

        let _ = estimator.estimate("bad", "20040-020", &parcel()).await;

        let events = recorder.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], EstimateEvent::Failed { ref reason } if reason.contains("origin")));
    }

    #[tokio::test]
    async fn test_quote_currency_is_configurable() {
        let quotes = estimator()
            .with_currency(Currency::USD)
            .estimate("01310-100", "20040-020", &parcel())
            .await
            .unwrap();
        assert_eq!(quotes[0].price.currency, Currency::USD);
    }
}

//! Payment-provider handoff stub.
//!
//! Stands in for a checkout-preference API: it assembles the payload a real
//! provider call would carry and produces an opaque reference token. No
//! network request is made; a real gateway could fail, this one cannot.

use crate::checkout::OrderSummary;
use crate::ids::{generate_id, PreferenceId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Return URLs the provider redirects back to after payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackUrls {
    pub success: String,
    pub failure: String,
    pub pending: String,
}

impl BackUrls {
    /// Derive the three return URLs from a site base URL.
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            success: format!("{base}/sucesso.html"),
            failure: format!("{base}/falha.html"),
            pending: format!("{base}/pendente.html"),
        }
    }
}

/// One purchasable item in a payment preference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentItem {
    /// Product identifier.
    pub id: String,
    /// Item title.
    pub title: String,
    /// Item description, including chosen options.
    pub description: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
}

/// Shipping terms attached to a payment preference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentShipment {
    /// Shipping cost.
    pub cost: Money,
    /// Service name the customer chose.
    pub mode: String,
}

/// The payload a real provider checkout-preference call would carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentPreference {
    pub items: Vec<PaymentItem>,
    pub shipments: PaymentShipment,
    pub back_urls: BackUrls,
    pub auto_return: String,
    pub statement_descriptor: String,
}

/// Simulated payment-provider gateway.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    back_url_base: String,
    statement_descriptor: String,
}

impl PaymentGateway {
    /// Create a gateway that derives return URLs from the given site base.
    pub fn new(back_url_base: impl Into<String>) -> Self {
        Self {
            back_url_base: back_url_base.into(),
            statement_descriptor: "ANIMATOON3D".to_string(),
        }
    }

    /// Set the statement descriptor shown on the customer's bill.
    pub fn with_statement_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.statement_descriptor = descriptor.into();
        self
    }

    /// Create an opaque payment reference for an order.
    ///
    /// Always succeeds in this simulation. The token is unique per call and
    /// carries no meaning beyond uniqueness.
    pub fn create_reference(&self, order: &OrderSummary) -> PreferenceId {
        // A real gateway would POST this payload and return the provider's
        // preference id.
        let _preference = self.build_preference(order);
        PreferenceId::new(format!("TEST-{}", generate_id()))
    }

    /// Assemble the provider payload for an order.
    pub fn build_preference(&self, order: &OrderSummary) -> PaymentPreference {
        let description = if order.options.is_empty() {
            order.product_name.clone()
        } else {
            format!("{} - {}", order.product_name, order.options_line())
        };

        PaymentPreference {
            items: vec![PaymentItem {
                id: order.product_id.to_string(),
                title: order.product_name.clone(),
                description,
                quantity: 1,
                unit_price: order.unit_price,
            }],
            shipments: PaymentShipment {
                cost: order.shipping.price,
                mode: order.shipping.service_name.clone(),
            },
            back_urls: BackUrls::from_base(&self.back_url_base),
            auto_return: "approved".to_string(),
            statement_descriptor: self.statement_descriptor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::ShippingSelection;
    use crate::money::Currency;
    use crate::shipping::ServiceTier;
    use std::collections::BTreeMap;

    fn order() -> OrderSummary {
        let catalog = Catalog::seed();
        let product = catalog.find_by_id("chaveiros-emotes").unwrap();

        let mut selections = BTreeMap::new();
        selections.insert("modelos".to_string(), "Feliz".to_string());

        let shipping = ShippingSelection {
            tier: ServiceTier::Express,
            service_code: ServiceTier::Express.code().to_string(),
            service_name: ServiceTier::Express.display_name().to_string(),
            price: Money::new(2500, Currency::BRL),
            delivery_days: 2,
        };

        OrderSummary::build(product, &selections, Some(&shipping)).unwrap()
    }

    #[test]
    fn test_reference_tokens_are_unique_and_prefixed() {
        let gateway = PaymentGateway::new("https://loja.example");
        let order = order();

        let first = gateway.create_reference(&order);
        let second = gateway.create_reference(&order);

        assert!(first.as_str().starts_with("TEST-"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_preference_payload() {
        let gateway = PaymentGateway::new("https://loja.example/");
        let preference = gateway.build_preference(&order());

        assert_eq!(preference.items.len(), 1);
        let item = &preference.items[0];
        assert_eq!(item.id, "chaveiros-emotes");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.description, "Chaveiros de emotes - Feliz");

        assert_eq!(preference.shipments.mode, "SEDEX");
        assert_eq!(preference.shipments.cost, Money::new(2500, Currency::BRL));
        assert_eq!(preference.auto_return, "approved");
        assert_eq!(preference.statement_descriptor, "ANIMATOON3D");
        assert_eq!(
            preference.back_urls.success,
            "https://loja.example/sucesso.html"
        );
    }

    #[test]
    fn test_preference_serializes() {
        let gateway = PaymentGateway::new("https://loja.example");
        let preference = gateway.build_preference(&order());

        let json = serde_json::to_string(&preference).unwrap();
        assert!(json.contains("\"statement_descriptor\":\"ANIMATOON3D\""));

        let parsed: PaymentPreference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, preference);
    }

    #[test]
    fn test_custom_statement_descriptor() {
        let gateway = PaymentGateway::new("https://loja.example")
            .with_statement_descriptor("OUTRALOJA");
        let preference = gateway.build_preference(&order());
        assert_eq!(preference.statement_descriptor, "OUTRALOJA");
    }
}

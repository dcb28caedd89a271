//! E-commerce domain types and logic for the Animatoon storefront.
//!
//! This crate provides the storefront's core, independent of any
//! presentation layer:
//!
//! - **Catalog**: immutable product catalog with lookup by identifier
//! - **Shipping**: simulated carrier quotes with validation, a rate policy
//!   and lifecycle events
//! - **Checkout**: order summary aggregation
//! - **Payment**: payment-provider handoff stub
//!
//! # Example
//!
//! ```rust,ignore
//! use animatoon_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let product = catalog.find_by_id("luminaria-acdc")?;
//!
//! let estimator = ShippingEstimator::default();
//! let quotes = estimator
//!     .estimate("01310-100", "20040-020", &product.parcel_spec())
//!     .await?;
//!
//! let shipping = ShippingSelection::from_quote(&quotes[0]);
//! let order = OrderSummary::build(product, &selections, Some(&shipping))?;
//!
//! let gateway = PaymentGateway::new("https://loja.example");
//! let reference = gateway.create_reference(&order);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod checkout;
pub mod payment;
pub mod shipping;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Dimensions, OptionCategory, Product};

    // Shipping
    pub use crate::shipping::{
        Cep, EstimateEvent, EstimateObserver, ParcelSpec, RateCard, RateTable, ServiceTier,
        ShippingEstimator, ShippingQuote,
    };

    // Checkout
    pub use crate::checkout::{ChosenOption, OrderSummary, ShippingSelection};

    // Payment
    pub use crate::payment::{PaymentGateway, PaymentPreference};
}

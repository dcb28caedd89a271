//! Order summary aggregation.

use std::collections::BTreeMap;

use crate::catalog::Product;
use crate::checkout::ShippingSelection;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A chosen customization value for one option category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenOption {
    /// Option category name.
    pub category: String,
    /// Chosen value.
    pub value: String,
}

/// The finalized combination of product, chosen options and shipping
/// quote, ready for payment handoff.
///
/// Built once per checkout attempt; immutable after that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub product_name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Chosen option values, in the product's category order.
    pub options: Vec<ChosenOption>,
    /// Chosen shipping quote.
    pub shipping: ShippingSelection,
    /// Unit price plus shipping price.
    pub total: Money,
}

impl OrderSummary {
    /// Aggregate a product, its chosen options and a shipping selection.
    ///
    /// Every option category the product defines must have exactly one
    /// chosen value; selections for categories the product does not define
    /// are ignored. A shipping quote must have been chosen.
    pub fn build(
        product: &Product,
        selections: &BTreeMap<String, String>,
        shipping: Option<&ShippingSelection>,
    ) -> Result<Self, CommerceError> {
        let shipping = shipping
            .ok_or_else(|| CommerceError::CheckoutIncomplete("shipping".to_string()))?;

        let mut options = Vec::with_capacity(product.options.len());
        for category in &product.options {
            let value = selections
                .get(&category.name)
                .ok_or_else(|| CommerceError::CheckoutIncomplete(category.name.clone()))?;
            if !category.allows(value) {
                return Err(CommerceError::Validation(format!(
                    "value {value:?} is not offered for option {:?}",
                    category.name
                )));
            }
            options.push(ChosenOption {
                category: category.name.clone(),
                value: value.clone(),
            });
        }

        let total = product.price.try_add(&shipping.price).ok_or_else(|| {
            CommerceError::CurrencyMismatch {
                expected: product.price.currency.code().to_string(),
                got: shipping.price.currency.code().to_string(),
            }
        })?;

        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit_price: product.price,
            options,
            shipping: shipping.clone(),
            total,
        })
    }

    /// Chosen option values joined for display, e.g. "Feliz".
    pub fn options_line(&self) -> String {
        self.options
            .iter()
            .map(|o| o.value.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

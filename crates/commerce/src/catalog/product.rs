//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::shipping::ParcelSpec;
use serde::{Deserialize, Serialize};

/// Physical dimensions of a packaged product, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in centimeters.
    pub length_cm: f64,
    /// Width in centimeters.
    pub width_cm: f64,
    /// Height in centimeters.
    pub height_cm: f64,
}

impl Dimensions {
    /// Create new dimensions.
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self {
            length_cm,
            width_cm,
            height_cm,
        }
    }

    /// Sum of the three dimensions.
    pub fn sum_cm(&self) -> f64 {
        self.length_cm + self.width_cm + self.height_cm
    }

    /// Volume in cubic centimeters.
    pub fn volume_cubic_cm(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    /// Check that every dimension is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.length_cm > 0.0 && self.width_cm > 0.0 && self.height_cm > 0.0
    }
}

/// A named axis of product customization (e.g. "modelos") with its ordered
/// set of allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCategory {
    /// Category name.
    pub name: String,
    /// Allowed values, in display order.
    pub values: Vec<String>,
}

impl OptionCategory {
    /// Create a new option category.
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            name: name.into(),
            values: values.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// Check whether a value is in the allowed set.
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Image references, in display order. Never empty.
    pub images: Vec<String>,
    /// Category tags for grouping/filtering.
    pub categories: Vec<String>,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Packaged dimensions.
    pub dimensions: Dimensions,
    /// Customization option categories. May be empty.
    pub options: Vec<OptionCategory>,
}

impl Product {
    /// Create a new product with a single image and no options.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            images: vec!["placeholder.jpg".to_string()],
            categories: Vec::new(),
            weight_kg: 0.1,
            dimensions: Dimensions::new(16.0, 11.0, 2.0),
            options: Vec::new(),
        }
    }

    /// Get an option category by name.
    pub fn option(&self, name: &str) -> Option<&OptionCategory> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Check whether the product defines any customization options.
    pub fn is_customizable(&self) -> bool {
        !self.options.is_empty()
    }

    /// The first image reference.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }

    /// The parcel the estimator prices for this product.
    pub fn parcel_spec(&self) -> ParcelSpec {
        ParcelSpec::new(
            self.weight_kg,
            self.dimensions.length_cm,
            self.dimensions.width_cm,
            self.dimensions.height_cm,
        )
    }

    /// Check the catalog invariants for this record.
    pub(crate) fn check(&self) -> Result<(), CommerceError> {
        if self.id.as_str().is_empty() {
            return Err(CommerceError::Validation(
                "product identifier must not be empty".to_string(),
            ));
        }
        if self.price.amount_cents < 0 {
            return Err(CommerceError::Validation(format!(
                "product {}: price must not be negative",
                self.id
            )));
        }
        if self.images.is_empty() {
            return Err(CommerceError::Validation(format!(
                "product {}: at least one image is required",
                self.id
            )));
        }
        if !(self.weight_kg > 0.0) {
            return Err(CommerceError::Validation(format!(
                "product {}: weight must be positive",
                self.id
            )));
        }
        if !self.dimensions.is_positive() {
            return Err(CommerceError::Validation(format!(
                "product {}: dimensions must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

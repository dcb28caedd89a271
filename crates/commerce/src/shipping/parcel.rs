//! Parcel specification and validation.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Maximum parcel weight accepted by the carrier, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 30.0;
/// Accepted length range, in centimeters.
pub const LENGTH_RANGE_CM: (f64, f64) = (16.0, 105.0);
/// Accepted width range, in centimeters.
pub const WIDTH_RANGE_CM: (f64, f64) = (11.0, 105.0);
/// Accepted height range, in centimeters.
pub const HEIGHT_RANGE_CM: (f64, f64) = (2.0, 105.0);
/// Maximum sum of the three dimensions, in centimeters.
pub const MAX_DIMENSION_SUM_CM: f64 = 200.0;

/// The physical package description used to price shipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParcelSpec {
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Length in centimeters.
    pub length_cm: f64,
    /// Width in centimeters.
    pub width_cm: f64,
    /// Height in centimeters.
    pub height_cm: f64,
}

impl ParcelSpec {
    /// Create a new parcel specification.
    pub fn new(weight_kg: f64, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            length_cm,
            width_cm,
            height_cm,
        }
    }

    /// Volume in cubic centimeters.
    pub fn volume_cubic_cm(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }

    /// Sum of the three dimensions, in centimeters.
    pub fn dimension_sum_cm(&self) -> f64 {
        self.length_cm + self.width_cm + self.height_cm
    }

    /// Check the parcel against the carrier bounds.
    ///
    /// Rules run in a fixed order and the first failing rule wins: weight,
    /// length, width, height, dimension sum.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > MAX_WEIGHT_KG {
            return Err(CommerceError::Validation(format!(
                "invalid weight: must be greater than 0 and at most {MAX_WEIGHT_KG} kg"
            )));
        }
        if !(LENGTH_RANGE_CM.0..=LENGTH_RANGE_CM.1).contains(&self.length_cm) {
            return Err(CommerceError::Validation(format!(
                "invalid length: must be between {} and {} cm",
                LENGTH_RANGE_CM.0, LENGTH_RANGE_CM.1
            )));
        }
        if !(WIDTH_RANGE_CM.0..=WIDTH_RANGE_CM.1).contains(&self.width_cm) {
            return Err(CommerceError::Validation(format!(
                "invalid width: must be between {} and {} cm",
                WIDTH_RANGE_CM.0, WIDTH_RANGE_CM.1
            )));
        }
        if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&self.height_cm) {
            return Err(CommerceError::Validation(format!(
                "invalid height: must be between {} and {} cm",
                HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
            )));
        }
        if self.dimension_sum_cm() > MAX_DIMENSION_SUM_CM {
            return Err(CommerceError::Validation(format!(
                "dimensions must not add up to more than {MAX_DIMENSION_SUM_CM} cm"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_parcel() -> ParcelSpec {
        ParcelSpec::new(0.5, 20.0, 15.0, 10.0)
    }

    #[test]
    fn test_valid_parcel_passes() {
        assert!(valid_parcel().validate().is_ok());
    }

    #[test]
    fn test_weight_bounds() {
        let mut parcel = valid_parcel();
        parcel.weight_kg = 0.0;
        assert!(parcel.validate().is_err());
        parcel.weight_kg = 31.0;
        assert!(parcel.validate().is_err());
        parcel.weight_kg = 30.0;
        assert!(parcel.validate().is_ok());
        parcel.weight_kg = f64::NAN;
        assert!(parcel.validate().is_err());
    }

    #[test]
    fn test_length_bounds() {
        let mut parcel = valid_parcel();
        parcel.length_cm = 15.9;
        assert!(parcel.validate().is_err());
        parcel.length_cm = 106.0;
        assert!(parcel.validate().is_err());
        parcel.length_cm = 16.0;
        assert!(parcel.validate().is_ok());
    }

    #[test]
    fn test_width_bounds() {
        let mut parcel = valid_parcel();
        parcel.width_cm = 10.0;
        assert!(parcel.validate().is_err());
        parcel.width_cm = 105.0;
        assert!(parcel.validate().is_ok());
    }

    #[test]
    fn test_height_bounds() {
        let mut parcel = valid_parcel();
        parcel.height_cm = 1.0;
        assert!(parcel.validate().is_err());
        parcel.height_cm = 2.0;
        assert!(parcel.validate().is_ok());
    }

    #[test]
    fn test_dimension_sum_cap() {
        // Each dimension in range, sum over the cap
        let parcel = ParcelSpec::new(1.0, 100.0, 80.0, 30.0);
        assert!(parcel.validate().is_err());

        let parcel = ParcelSpec::new(1.0, 100.0, 80.0, 20.0);
        assert!(parcel.validate().is_ok());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Both weight and length invalid: the weight message is reported
        let parcel = ParcelSpec::new(0.0, 1.0, 15.0, 10.0);
        let err = parcel.validate().unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_volume() {
        assert!((valid_parcel().volume_cubic_cm() - 3000.0).abs() < f64::EPSILON);
    }
}

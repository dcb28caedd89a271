//! Postal code (CEP) handling.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated 8-digit Brazilian postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cep(String);

impl Cep {
    /// Parse free-form input into a postal code.
    ///
    /// Non-digit characters are stripped first, so masked input like
    /// "01310-100" is accepted. Anything that does not reduce to exactly
    /// 8 digits is rejected.
    pub fn parse(input: &str) -> Result<Self, CommerceError> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 8 {
            return Err(CommerceError::Validation(format!(
                "invalid postal code: {input:?}"
            )));
        }
        Ok(Self(digits))
    }

    /// The bare 8-digit form.
    pub fn as_digits(&self) -> &str {
        &self.0
    }

    /// Numeric value of the first three digits, the regional routing
    /// prefix used as a distance proxy.
    pub fn prefix(&self) -> u32 {
        self.0[..3].parse().unwrap_or(0)
    }

    /// Distance proxy to another postal code: the absolute difference of
    /// the regional prefixes.
    pub fn distance_to(&self, other: &Cep) -> u32 {
        self.prefix().abs_diff(other.prefix())
    }
}

impl fmt::Display for Cep {
    /// Renders the masked "01310-100" form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", &self.0[..5], &self.0[5..])
    }
}

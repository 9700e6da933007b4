//! Postcode value object.

use super::errors::ValidationError;
use super::validators::is_valid_postcode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A six-digit postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode(String);

impl Postcode {
    pub fn new(postcode: impl Into<String>) -> Result<Self, ValidationError> {
        let postcode = postcode.into();
        if !is_valid_postcode(&postcode) {
            return Err(ValidationError::InvalidPostcode(postcode));
        }
        Ok(Self(postcode))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Postcode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Postcode> for String {
    fn from(value: Postcode) -> Self {
        value.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! MobileNumber value object.

use super::errors::ValidationError;
use super::validators::is_valid_mobile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ten-digit mobile number, stored without country code or separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn new(mobile: impl Into<String>) -> Result<Self, ValidationError> {
        let mobile = mobile.into();
        if !is_valid_mobile(&mobile) {
            return Err(ValidationError::InvalidMobile(mobile));
        }
        Ok(Self(mobile))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MobileNumber> for String {
    fn from(value: MobileNumber) -> Self {
        value.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided PAN does not match `AAAAA9999A`.
    InvalidPan(String),

    /// The provided email address is invalid or too long.
    InvalidEmail(String),

    /// The provided mobile number is not ten digits.
    InvalidMobile(String),

    /// The provided postcode is not six digits.
    InvalidPostcode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPan(pan) => write!(f, "Invalid PAN: {}", pan),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidMobile(mobile) => write!(f, "Invalid mobile number: {}", mobile),
            Self::InvalidPostcode(postcode) => write!(f, "Invalid postcode: {}", postcode),
        }
    }
}

impl std::error::Error for ValidationError {}

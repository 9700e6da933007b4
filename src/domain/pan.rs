//! Pan value object.

use super::errors::ValidationError;
use super::validators::is_valid_pan;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for a PAN (Permanent Account Number).
///
/// A PAN is ten characters: five uppercase letters, four digits, and a
/// trailing uppercase letter.
///
/// # Example
///
/// ```
/// use customer_form::domain::Pan;
///
/// let pan = Pan::parse("abcde1234f").unwrap();
/// assert_eq!(pan.as_str(), "ABCDE1234F");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pan(String);

impl Pan {
    /// Create a new Pan, validating the format exactly as given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPan` if the value is not `AAAAA9999A`.
    pub fn new(pan: impl Into<String>) -> Result<Self, ValidationError> {
        let pan = pan.into();
        if !is_valid_pan(&pan) {
            return Err(ValidationError::InvalidPan(pan));
        }
        Ok(Self(pan))
    }

    /// Normalize user input to uppercase, then validate.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::new(normalize(input))
    }

    /// Get the PAN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Uppercase a raw PAN entry the way the form stores it.
pub fn normalize(input: &str) -> String {
    input.to_uppercase()
}

// Serde support - serialize as string
impl Serialize for Pan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Pan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pan::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Error types for the customer form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when calling the remote lookup API.
#[derive(Error, Debug)]
pub enum LookupError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Generic lookup error with context
    #[error("Lookup error: {0}")]
    Other(String),
}

/// Errors that can occur while reading or writing the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be encoded or decoded
    #[error("Stored data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key contains characters that cannot be used as a storage name
    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    /// Record position does not exist
    #[error("No customer number {} (list has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    /// A stored record fails the customer rules
    #[error("Stored customer {} is invalid: {source}", .index + 1)]
    InvalidRecord { index: usize, source: FormError },

    /// `save_edit` called while no edit is open
    #[error("No customer is being edited")]
    NoActiveEdit,

    /// Store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by the customer form.
///
/// The save-time variants carry the blocking message shown to the user and
/// are checked in declaration order; only the first failure is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter a valid PAN.")]
    InvalidPan,

    #[error("Please enter a valid Full Name with a maximum length of 140 characters.")]
    InvalidFullName,

    #[error("Please enter a valid Email with a maximum length of 255 characters.")]
    InvalidEmail,

    #[error("Please enter a valid Mobile Number.")]
    InvalidMobile,

    #[error("Please add at least one address.")]
    NoAddresses,

    #[error("Please fill all required address fields with valid data.")]
    InvalidAddress { index: usize },

    /// Row cap reached on `add_address_row`
    #[error("A customer can have at most {max} addresses")]
    AddressLimitReached { max: usize },

    #[error("No address number {} (form has {len})", .index + 1)]
    AddressIndexOutOfRange { index: usize, len: usize },

    /// The form already committed its customer
    #[error("Form is closed")]
    Closed,
}

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = StoreError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No customer number 5 (list has 2)");

        let err = FormError::InvalidPan;
        assert_eq!(err.to_string(), "Please enter a valid PAN.");

        let err = FormError::InvalidAddress { index: 1 };
        assert_eq!(
            err.to_string(),
            "Please fill all required address fields with valid data."
        );
    }

    #[test]
    fn test_api_error_variants() {
        let err = LookupError::ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad gateway"));
    }
}

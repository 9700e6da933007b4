//! Domain value objects and validators.
//!
//! This module contains the field validators and type-safe wrappers for the
//! customer's PAN, email address, mobile number, and postcode. These value
//! objects provide validation at construction time and prevent invalid data
//! from being persisted.

pub mod email;
pub mod errors;
pub mod mobile;
pub mod pan;
pub mod postcode;
pub mod validators;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use mobile::MobileNumber;
pub use pan::Pan;
pub use postcode::Postcode;
pub use validators::{
    is_valid_email, is_valid_full_name, is_valid_mobile, is_valid_pan, is_valid_postcode,
    MAX_EMAIL_LEN, MAX_FULL_NAME_LEN,
};

//! Field validators.
//!
//! Pure predicates shared by the value objects, the form's autofill triggers,
//! and the save gate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a customer's full name, in characters.
pub const MAX_FULL_NAME_LEN: usize = 140;

/// Maximum length of an email address, in characters.
pub const MAX_EMAIL_LEN: usize = 255;

static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Failed to compile PAN regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile mobile regex"));

static POSTCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile postcode regex"));

/// Five uppercase letters, four digits, one uppercase letter (`ABCDE1234F`).
pub fn is_valid_pan(s: &str) -> bool {
    PAN_REGEX.is_match(s)
}

/// `local@domain.tld` shape: no whitespace, a single '@', and a '.' after it.
///
/// The length cap is not part of the shape check; see [`MAX_EMAIL_LEN`].
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Exactly ten decimal digits.
pub fn is_valid_mobile(s: &str) -> bool {
    MOBILE_REGEX.is_match(s)
}

/// Exactly six decimal digits.
pub fn is_valid_postcode(s: &str) -> bool {
    POSTCODE_REGEX.is_match(s)
}

/// Non-empty and at most [`MAX_FULL_NAME_LEN`] characters.
pub fn is_valid_full_name(s: &str) -> bool {
    !s.trim().is_empty() && s.chars().count() <= MAX_FULL_NAME_LEN
}

//! Customer model as persisted in the record store.

use crate::domain::{is_valid_full_name, EmailAddress, MobileNumber, Pan, Postcode};
use crate::error::{FormError, FormResult};
use serde::{Deserialize, Serialize};

/// Maximum number of addresses a customer may have.
pub const MAX_ADDRESSES: usize = 10;

/// A validated customer record.
///
/// Instances are produced by [`CustomerForm::save`](crate::form::CustomerForm::save)
/// or by deserializing the stored list. Deserializing only checks the value
/// objects; call [`Customer::validate`] for the record-level rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Permanent Account Number, uppercase
    pub pan: Pan,

    /// Full name (1-140 characters)
    pub full_name: String,

    /// Contact email
    pub email: EmailAddress,

    /// Ten-digit mobile number
    pub mobile: MobileNumber,

    /// Postal addresses in entry order (1-10)
    pub addresses: Vec<Address>,
}

impl Customer {
    /// Check the rules the value objects cannot: full name, address count,
    /// and a non-blank first line on every address.
    pub fn validate(&self) -> FormResult<()> {
        if !is_valid_full_name(&self.full_name) {
            return Err(FormError::InvalidFullName);
        }
        if self.addresses.is_empty() {
            return Err(FormError::NoAddresses);
        }
        if self.addresses.len() > MAX_ADDRESSES {
            return Err(FormError::AddressLimitReached { max: MAX_ADDRESSES });
        }
        if let Some(index) = self
            .addresses
            .iter()
            .position(|a| a.line1.trim().is_empty())
        {
            return Err(FormError::InvalidAddress { index });
        }
        Ok(())
    }
}

/// A postal address belonging to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// First address line (required)
    pub line1: String,

    /// Second address line, empty when not given
    #[serde(default)]
    pub line2: String,

    /// Six-digit postcode
    pub postcode: Postcode,

    /// City, usually filled from the postcode lookup
    #[serde(default)]
    pub city: String,

    /// State, usually filled from the postcode lookup
    #[serde(default)]
    pub state: String,
}

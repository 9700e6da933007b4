//! Field identifiers and draft rows for the customer form.

use crate::models::Address;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Top-level customer fields editable through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Pan,
    FullName,
    Email,
    Mobile,
}

/// Fields of a single address row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Line1,
    Line2,
    Postcode,
    City,
    State,
}

/// Error returned when a field name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for CustomerField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pan" => Ok(Self::Pan),
            "name" | "fullname" | "full_name" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "mobile" | "phone" => Ok(Self::Mobile),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

impl FromStr for AddressField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line1" => Ok(Self::Line1),
            "line2" => Ok(Self::Line2),
            "postcode" | "pin" => Ok(Self::Postcode),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pan => "PAN",
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Mobile => "Mobile Number",
        };
        f.write_str(label)
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Line1 => "Address Line 1",
            Self::Line2 => "Address Line 2",
            Self::Postcode => "Postcode",
            Self::City => "City",
            Self::State => "State",
        };
        f.write_str(label)
    }
}

/// An address row as typed, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub line1: String,
    pub line2: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
}

impl AddressDraft {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Line1 => &self.line1,
            AddressField::Line2 => &self.line2,
            AddressField::Postcode => &self.postcode,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
        }
    }

    pub fn set(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::Line1 => &mut self.line1,
            AddressField::Line2 => &mut self.line2,
            AddressField::Postcode => &mut self.postcode,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
        };
        *slot = value;
    }
}

impl From<&Address> for AddressDraft {
    fn from(address: &Address) -> Self {
        Self {
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            postcode: address.postcode.as_str().to_string(),
            city: address.city.clone(),
            state: address.state.clone(),
        }
    }
}

//! Data models for customer records and lookup payloads.
//!
//! This module contains the persisted customer record and the request and
//! response bodies of the PAN and postcode lookups.

pub mod customer;
pub mod lookup;

pub use customer::{Address, Customer, MAX_ADDRESSES};
pub use lookup::{
    PanVerification, PanVerificationRequest, PlaceName, PostcodeDetails, PostcodeRequest,
};

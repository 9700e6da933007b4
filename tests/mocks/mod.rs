//! Test doubles shared by the integration tests.

mod mock_customer_repository;
mod mock_lookup_client;

#[allow(unused_imports)]
pub use mock_customer_repository::MockCustomerRepository;
#[allow(unused_imports)]
pub use mock_lookup_client::MockLookupClient;

use customer_form::domain::{EmailAddress, MobileNumber, Pan, Postcode};
use customer_form::{Address, Customer};

/// A valid customer with one address.
#[allow(dead_code)]
pub fn sample_customer(pan: &str, full_name: &str) -> Customer {
    Customer {
        pan: Pan::new(pan).unwrap(),
        full_name: full_name.to_string(),
        email: EmailAddress::new(format!(
            "{}@example.com",
            full_name.to_lowercase().replace(' ', ".")
        ))
        .unwrap(),
        mobile: MobileNumber::new("9876543210").unwrap(),
        addresses: vec![Address {
            line1: "12 MG Road".to_string(),
            line2: String::new(),
            postcode: Postcode::new("560001").unwrap(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
        }],
    }
}

//! Customer Form - capture and store customer records with remote autofill.
//!
//! A customer is identified by a PAN and carries a name, email, mobile number
//! and one to ten postal addresses. Entering a well-formed PAN or postcode
//! triggers a lookup that fills in the registered name or the city and state.
//! Saved customers are kept as one JSON list in a key-value store.
//!
//! # Architecture
//!
//! - **domain**: Field validators and validated value objects
//! - **models**: The stored customer record and lookup payloads
//! - **error**: Error types for lookups, storage, configuration and the form
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the PAN and postcode lookup API
//! - **form**: Form state machine and the async session that runs lookups
//! - **storage**: Key-value store backends
//! - **repositories**: Customer list persistence on top of a store
//! - **services**: The in-memory customer list with create, edit and delete
//! - **console**: Line-oriented terminal front end
//! - **metrics**: Lookup counters

pub mod client;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;
pub mod storage;

pub use client::{AsyncLookupClient, AsyncLookupClientImpl, LookupClient};
pub use config::Config;
pub use console::{Console, Reply};
pub use error::{ConfigError, FormError, LookupError, StoreError};
pub use form::{Autofill, CustomerForm, FormSession};
pub use metrics::{LookupTimer, Metrics, MetricsSummary};
pub use models::{Address, Customer, PanVerification, PostcodeDetails};
pub use repositories::{CustomerRepository, StoreCustomerRepository};
pub use services::CustomerList;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

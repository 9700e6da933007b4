use crate::error::{StoreError, StoreResult};
use crate::models::Customer;
use crate::repositories::traits::CustomerRepository;
use crate::storage::KeyValueStore;
use std::sync::Arc;

/// Customer repository over a [`KeyValueStore`].
///
/// The whole list is stored as one JSON array under a single fixed key.
pub struct StoreCustomerRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StoreCustomerRepository {
    /// Create a repository that keeps the list under `key`.
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl CustomerRepository for StoreCustomerRepository {
    fn load(&self) -> StoreResult<Vec<Customer>> {
        match self.store.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => {
                let customers: Vec<Customer> = serde_json::from_str(&raw)?;
                for (index, customer) in customers.iter().enumerate() {
                    customer
                        .validate()
                        .map_err(|source| StoreError::InvalidRecord { index, source })?;
                }
                tracing::debug!("Loaded {} customers from '{}'", customers.len(), self.key);
                Ok(customers)
            }
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, customers: &[Customer]) -> StoreResult<()> {
        let raw = serde_json::to_string(customers)?;
        self.store.set(&self.key, &raw)?;
        tracing::debug!("Saved {} customers to '{}'", customers.len(), self.key);
        Ok(())
    }
}

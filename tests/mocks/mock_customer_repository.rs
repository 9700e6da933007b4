use customer_form::error::{StoreError, StoreResult};
use customer_form::models::Customer;
use customer_form::repositories::CustomerRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock customer repository for testing.
///
/// Keeps the stored list in memory, tracks method calls, and can be told to
/// fail every save.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCustomerRepository {
    stored: Arc<Mutex<Vec<Customer>>>,
    fail_saves: Arc<AtomicBool>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository that already holds `customers`.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = customers;
        repo
    }

    /// Make every following save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// What a fresh load would return right now.
    pub fn stored(&self) -> Vec<Customer> {
        self.stored.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl CustomerRepository for MockCustomerRepository {
    fn load(&self) -> StoreResult<Vec<Customer>> {
        self.track_call("load");
        Ok(self.stored())
    }

    fn save(&self, customers: &[Customer]) -> StoreResult<()> {
        self.track_call("save");
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }
        *self.stored.lock().unwrap() = customers.to_vec();
        Ok(())
    }
}

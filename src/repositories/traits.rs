use crate::error::StoreResult;
use crate::models::Customer;

/// Repository for the persisted customer list.
///
/// Provides abstraction over where the list lives (file, memory, or any other
/// key-value backend), so the form and list surface never touch storage
/// directly.
pub trait CustomerRepository: Send + Sync {
    /// Load the full list in stored order. An unset list loads as empty.
    fn load(&self) -> StoreResult<Vec<Customer>>;

    /// Replace the stored list.
    fn save(&self, customers: &[Customer]) -> StoreResult<()>;
}

//! Key-value persistence boundary.
//!
//! The record store keeps the whole customer list as one serialized value
//! under a single key. [`FileStore`] keeps one file per key in a data
//! directory; [`MemoryStore`] keeps values in a map for tests and
//! throwaway sessions.

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::error::StoreResult;

/// A synchronous string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if unset.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing an unset key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

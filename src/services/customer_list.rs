//! Customer list service.
//!
//! Keeps the stored customers in memory in stored order and writes the whole
//! list back through the repository after every mutation. Positions are the
//! only identity a record has.

use crate::error::{StoreError, StoreResult};
use crate::form::CustomerForm;
use crate::models::Customer;
use crate::repositories::CustomerRepository;
use std::sync::Arc;

/// The stored customers plus the position of the record being edited.
pub struct CustomerList {
    repo: Arc<dyn CustomerRepository>,
    customers: Vec<Customer>,
    editing: Option<usize>,
}

impl CustomerList {
    /// Load every stored customer. An empty or unset store gives an empty list.
    pub fn load(repo: Arc<dyn CustomerRepository>) -> StoreResult<Self> {
        let customers = repo.load()?;
        tracing::info!("Loaded {} customers", customers.len());
        Ok(Self {
            repo,
            customers,
            editing: None,
        })
    }

    pub fn records(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    /// Position of the record currently open for editing.
    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.customers.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.customers.len(),
            });
        }
        Ok(())
    }

    /// Write `next` and adopt it only if the write succeeded.
    fn commit(&mut self, next: Vec<Customer>) -> StoreResult<()> {
        self.repo.save(&next)?;
        self.customers = next;
        Ok(())
    }

    /// Append a newly saved customer.
    pub fn create(&mut self, customer: Customer) -> StoreResult<usize> {
        let mut next = self.customers.clone();
        next.push(customer);
        self.commit(next)?;

        let index = self.customers.len() - 1;
        tracing::info!("Created customer at position {}", index);
        Ok(index)
    }

    /// Remove the customer at `index`, keeping the others in order.
    pub fn delete(&mut self, index: usize) -> StoreResult<Customer> {
        self.check_index(index)?;

        let mut next = self.customers.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        // An open edit on a shifted or removed record can no longer be saved
        // to the right position.
        if let Some(editing) = self.editing {
            if editing == index {
                self.editing = None;
            } else if editing > index {
                self.editing = Some(editing - 1);
            }
        }

        tracing::info!("Deleted customer at position {}", index);
        Ok(removed)
    }

    /// Open the customer at `index` for editing.
    ///
    /// The returned form is seeded with a copy; nothing changes in the list
    /// until [`save_edit`](Self::save_edit).
    pub fn edit(&mut self, index: usize) -> StoreResult<CustomerForm> {
        self.check_index(index)?;
        self.editing = Some(index);
        Ok(CustomerForm::from_customer(&self.customers[index]))
    }

    /// Replace the record being edited and close the edit.
    pub fn save_edit(&mut self, customer: Customer) -> StoreResult<usize> {
        let index = self.editing.ok_or(StoreError::NoActiveEdit)?;
        self.check_index(index)?;

        let mut next = self.customers.clone();
        next[index] = customer;
        self.commit(next)?;
        self.editing = None;

        tracing::info!("Updated customer at position {}", index);
        Ok(index)
    }

    /// Close the edit without writing anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Re-read the list from the repository, dropping any open edit.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.customers = self.repo.load()?;
        self.editing = None;
        Ok(())
    }
}

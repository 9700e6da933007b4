//! Async form session.
//!
//! Wraps a [`CustomerForm`] and runs its autofill lookups as background tasks.
//! Edits return as soon as the form is updated; lookup results are applied
//! whenever they arrive, subject to the form's staleness checks.

use super::customer_form::{Autofill, CustomerForm};
use super::fields::{AddressDraft, AddressField, CustomerField};
use crate::client::AsyncLookupClient;
use crate::error::FormResult;
use crate::metrics::Metrics;
use crate::models::Customer;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// A form bound to a lookup client.
pub struct FormSession {
    form: Arc<Mutex<CustomerForm>>,
    lookups: Arc<dyn AsyncLookupClient>,
    metrics: Metrics,
    in_flight: Mutex<Vec<JoinHandle<Autofill>>>,
}

impl FormSession {
    pub fn new(form: CustomerForm, lookups: Arc<dyn AsyncLookupClient>, metrics: Metrics) -> Self {
        Self {
            form: Arc::new(Mutex::new(form)),
            lookups,
            metrics,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// A copy of the current form state.
    pub async fn snapshot(&self) -> CustomerForm {
        self.form.lock().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.form.lock().await.is_loading()
    }

    /// Set a top-level field. Returns true if a PAN verification was started.
    pub async fn set_field(&self, field: CustomerField, value: &str) -> FormResult<bool> {
        let ticket = self.form.lock().await.set_field(field, value)?;
        let Some(ticket) = ticket else {
            return Ok(false);
        };

        let form = self.form.clone();
        let lookups = self.lookups.clone();
        let metrics = self.metrics.clone();
        tracing::debug!("Verifying PAN {}", ticket.pan);

        let handle = tokio::spawn(async move {
            let result = lookups.verify_pan(&ticket.pan).await;
            let outcome = form.lock().await.resolve_pan_lookup(&ticket, result);
            record(&metrics, outcome);
            outcome
        });
        self.track(handle).await;
        Ok(true)
    }

    pub async fn add_address_row(&self) -> FormResult<usize> {
        self.form.lock().await.add_address_row()
    }

    pub async fn remove_address_row(&self, index: usize) -> FormResult<AddressDraft> {
        self.form.lock().await.remove_address_row(index)
    }

    /// Set one address field. Returns true if a postcode lookup was started.
    pub async fn set_address_field(
        &self,
        index: usize,
        field: AddressField,
        value: &str,
    ) -> FormResult<bool> {
        let ticket = self
            .form
            .lock()
            .await
            .set_address_field(index, field, value)?;
        let Some(ticket) = ticket else {
            return Ok(false);
        };

        let form = self.form.clone();
        let lookups = self.lookups.clone();
        let metrics = self.metrics.clone();
        tracing::debug!("Looking up postcode {}", ticket.postcode);

        let handle = tokio::spawn(async move {
            let result = lookups.postcode_details(&ticket.postcode).await;
            let outcome = form.lock().await.resolve_postcode_lookup(&ticket, result);
            record(&metrics, outcome);
            outcome
        });
        self.track(handle).await;
        Ok(true)
    }

    /// Validate and commit the current draft.
    ///
    /// Lookups still in flight are not awaited; once committed, their results
    /// are discarded.
    pub async fn save(&self) -> FormResult<Customer> {
        self.form.lock().await.save()
    }

    /// Hold on to a lookup task, dropping tasks that have already finished.
    async fn track(&self, handle: JoinHandle<Autofill>) {
        let mut in_flight = self.in_flight.lock().await;
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }

    /// Wait for the tracked lookups and return their outcomes in start order.
    ///
    /// Lookups that had already finished when a later one was started are no
    /// longer tracked; their results were applied when they arrived.
    pub async fn settle(&self) -> Vec<Autofill> {
        let handles = std::mem::take(&mut *self.in_flight.lock().await);
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => tracing::error!("Lookup task failed: {}", e),
            }
        }
        outcomes
    }
}

fn record(metrics: &Metrics, outcome: Autofill) {
    match outcome {
        Autofill::Applied => metrics.record_autofill_applied(),
        Autofill::Stale => metrics.record_stale_result(),
        Autofill::NoMatch | Autofill::Failed => {}
    }
}

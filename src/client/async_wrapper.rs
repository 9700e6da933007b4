//! Async wrapper around synchronous LookupClient.
//!
//! This module provides an async interface to the synchronous LookupClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::LookupClient;
use crate::error::{LookupError, LookupResult};
use crate::models::{PanVerification, PostcodeDetails};
use async_trait::async_trait;
use std::sync::Arc;

/// Async lookup operations used by the form session.
///
/// Implemented by [`AsyncLookupClientImpl`] for the real API and by test
/// doubles that script responses.
#[async_trait]
pub trait AsyncLookupClient: Send + Sync {
    async fn verify_pan(&self, pan: &str) -> LookupResult<PanVerification>;
    async fn postcode_details(&self, postcode: &str) -> LookupResult<PostcodeDetails>;
}

/// Async wrapper around synchronous LookupClient.
#[derive(Clone)]
pub struct AsyncLookupClientImpl {
    client: Arc<LookupClient>,
}

impl AsyncLookupClientImpl {
    pub fn new(client: LookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncLookupClient for AsyncLookupClientImpl {
    async fn verify_pan(&self, pan: &str) -> LookupResult<PanVerification> {
        let client = self.client.clone();
        let pan = pan.to_string();

        tokio::task::spawn_blocking(move || client.verify_pan(&pan))
            .await
            .map_err(|e| LookupError::Other(format!("Task join error: {}", e)))?
    }

    async fn postcode_details(&self, postcode: &str) -> LookupResult<PostcodeDetails> {
        let client = self.client.clone();
        let postcode = postcode.to_string();

        tokio::task::spawn_blocking(move || client.postcode_details(&postcode))
            .await
            .map_err(|e| LookupError::Other(format!("Task join error: {}", e)))?
    }
}

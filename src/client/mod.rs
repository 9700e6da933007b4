//! HTTP client for the PAN verification and postcode lookup API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles error mapping and timing
//! for both lookups.

mod async_wrapper;
pub use async_wrapper::{AsyncLookupClient, AsyncLookupClientImpl};

use crate::config::Config;
use crate::error::{LookupError, LookupResult};
use crate::metrics::{LookupTimer, Metrics};
use crate::models::{PanVerification, PanVerificationRequest, PostcodeDetails, PostcodeRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const VERIFY_PAN_PATH: &str = "/verify-pan.php";
const POSTCODE_DETAILS_PATH: &str = "/get-postcode-details.php";

/// HTTP client for the lookup API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct LookupClient {
    /// Base URL for the lookup API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl LookupClient {
    /// Create a new LookupClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.lookup_api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a LookupClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector instead of the client's own.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// POST a JSON body and decode the JSON response.
    fn post<B, R>(&self, path: &str, body: &B) -> LookupResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.build_url(path);
        let timer = LookupTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                let body = response
                    .into_string()
                    .map_err(|e| LookupError::HttpError(e.to_string()))?;
                serde_json::from_str::<R>(&body).map_err(LookupError::JsonError)
            });

        match &result {
            Ok(_) => {
                tracing::debug!("POST {} - Success", url);
                timer.complete();
            }
            Err(e) => {
                tracing::debug!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a LookupError.
    fn map_error(&self, error: ureq::Error) -> LookupError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                LookupError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    LookupError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    LookupError::Timeout
                } else {
                    LookupError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Verify a PAN and fetch the registered holder's name.
    pub fn verify_pan(&self, pan: &str) -> LookupResult<PanVerification> {
        self.post(VERIFY_PAN_PATH, &PanVerificationRequest { pan_number: pan })
    }

    /// Resolve a postcode to its city and state.
    pub fn postcode_details(&self, postcode: &str) -> LookupResult<PostcodeDetails> {
        self.post(POSTCODE_DETAILS_PATH, &PostcodeRequest { postcode })
    }
}

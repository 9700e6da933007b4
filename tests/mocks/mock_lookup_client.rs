use async_trait::async_trait;
use customer_form::client::AsyncLookupClient;
use customer_form::error::{LookupError, LookupResult};
use customer_form::models::{PanVerification, PlaceName, PostcodeDetails};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct Scripted<T> {
    delay: Duration,
    response: Option<T>,
}

/// Mock lookup client with scripted responses.
///
/// Each PAN or postcode can be given a response and a delay before it is
/// returned. Unscripted values and scripted failures return an error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockLookupClient {
    pans: Arc<Mutex<HashMap<String, Scripted<PanVerification>>>>,
    postcodes: Arc<Mutex<HashMap<String, Scripted<PostcodeDetails>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockLookupClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `pan` as registered to `full_name` after `delay`.
    pub fn pan_name(&self, pan: &str, full_name: &str, delay: Duration) -> &Self {
        let verification = PanVerification {
            is_valid: true,
            full_name: Some(full_name.to_string()),
        };
        self.pans.lock().unwrap().insert(
            pan.to_string(),
            Scripted {
                delay,
                response: Some(verification),
            },
        );
        self
    }

    /// Answer `pan` as not registered.
    pub fn pan_unregistered(&self, pan: &str) -> &Self {
        self.pans.lock().unwrap().insert(
            pan.to_string(),
            Scripted {
                delay: Duration::ZERO,
                response: Some(PanVerification::default()),
            },
        );
        self
    }

    /// Answer `postcode` with a city and state after `delay`.
    pub fn postcode(&self, postcode: &str, city: &str, state: &str, delay: Duration) -> &Self {
        let details = PostcodeDetails {
            city: Some(vec![PlaceName {
                name: city.to_string(),
            }]),
            state: Some(vec![PlaceName {
                name: state.to_string(),
            }]),
        };
        self.postcodes.lock().unwrap().insert(
            postcode.to_string(),
            Scripted {
                delay,
                response: Some(details),
            },
        );
        self
    }

    /// Fail lookups of `postcode` after `delay`.
    pub fn postcode_failure(&self, postcode: &str, delay: Duration) -> &Self {
        self.postcodes.lock().unwrap().insert(
            postcode.to_string(),
            Scripted {
                delay,
                response: None,
            },
        );
        self
    }

    /// Every lookup made so far, as `pan:<value>` or `postcode:<value>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn track_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

async fn answer<T: Clone>(scripted: Option<Scripted<T>>, what: &str) -> LookupResult<T> {
    let Some(scripted) = scripted else {
        return Err(LookupError::Other(format!("no scripted response for {}", what)));
    };
    if !scripted.delay.is_zero() {
        tokio::time::sleep(scripted.delay).await;
    }
    scripted
        .response
        .ok_or_else(|| LookupError::HttpError("Connection failed".to_string()))
}

#[async_trait]
impl AsyncLookupClient for MockLookupClient {
    async fn verify_pan(&self, pan: &str) -> LookupResult<PanVerification> {
        self.track_call(format!("pan:{}", pan));
        let scripted = self.pans.lock().unwrap().get(pan).cloned();
        answer(scripted, pan).await
    }

    async fn postcode_details(&self, postcode: &str) -> LookupResult<PostcodeDetails> {
        self.track_call(format!("postcode:{}", postcode));
        let scripted = self.postcodes.lock().unwrap().get(postcode).cloned();
        answer(scripted, postcode).await
    }
}

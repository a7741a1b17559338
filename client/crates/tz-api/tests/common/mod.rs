//! Shared doubles for the pipeline integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tz_api::{ApiClient, Notifier, SessionExpiry, TokenProvider};
use tz_config::ApiConfig;

/// Notifier that records every toast for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn last_error(&self) -> Option<String> {
        self.errors.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Expiry sink that counts invocations.
#[derive(Default)]
pub struct RecordingExpiry {
    pub calls: AtomicUsize,
}

impl RecordingExpiry {
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SessionExpiry for RecordingExpiry {
    fn session_expired(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Token source whose value can change between requests.
#[derive(Default)]
pub struct SwappableToken {
    token: Mutex<Option<String>>,
}

impl SwappableToken {
    pub fn with(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }

    pub fn set(&self, token: Option<&str>) {
        *self.token.lock().unwrap() = token.map(String::from);
    }
}

impl TokenProvider for SwappableToken {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

pub struct TestPipeline {
    pub client: ApiClient,
    pub tokens: Arc<SwappableToken>,
    pub expiry: Arc<RecordingExpiry>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Build a client against the given base URL with recording seams.
pub fn pipeline(base_url: &str, token: Option<&str>) -> TestPipeline {
    let tokens = Arc::new(match token {
        Some(t) => SwappableToken::with(t),
        None => SwappableToken::default(),
    });
    let expiry = Arc::new(RecordingExpiry::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };

    let client = ApiClient::new(
        &config,
        tokens.clone(),
        expiry.clone(),
        notifier.clone(),
    );

    TestPipeline {
        client,
        tokens,
        expiry,
        notifier,
    }
}

//! Common test utilities for integration tests
//!
//! Provides a scripted in-memory `BreedLookup` that records every call it
//! receives, so tests can assert exactly what reached the delegate.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use breedcache::{BreedLookup, LookupError, LookupResult};

/// In-memory lookup answering from a fixed table.
///
/// Keys missing from the table answer `NotFound`. Keys registered with
/// [`ScriptedLookup::with_upstream_failure`] answer `Upstream`.
#[derive(Default)]
pub struct ScriptedLookup {
    answers: HashMap<String, LookupResult<Vec<String>>>,
    received: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed(mut self, breed: &str, sub_breeds: &[&str]) -> Self {
        let subs = sub_breeds.iter().map(|s| (*s).to_string()).collect();
        self.answers.insert(breed.to_string(), Ok(subs));
        self
    }

    pub fn with_upstream_failure(mut self, breed: &str, message: &str) -> Self {
        self.answers
            .insert(breed.to_string(), Err(LookupError::Upstream(message.to_string())));
        self
    }

    /// Every breed name the lookup was called with, in order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl BreedLookup for ScriptedLookup {
    async fn fetch(&self, breed: &str) -> LookupResult<Vec<String>> {
        self.received
            .lock()
            .expect("lock poisoned")
            .push(breed.to_string());

        self.answers
            .get(breed)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound(format!("Breed not found: {breed}"))))
    }
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

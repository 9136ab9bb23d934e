//! HTTP client for the Dog CEO breed catalog.
//!
//! Maps the API's responses onto the two lookup failure kinds:
//! an unknown breed (HTTP 404 or a non-"success" envelope) becomes
//! [`LookupError::NotFound`], everything else that goes wrong becomes
//! [`LookupError::Upstream`].

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::errors::{LookupError, LookupResult};
use crate::domain::models::DogApiConfig;
use crate::domain::ports::BreedLookup;

use super::models::DogApiResponse;

/// Path segment appended after the breed name.
const LIST_SUFFIX: &str = "list";

/// HTTP client for the Dog CEO API.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Prefix the breed name and `list` are appended to.
    base_url: Url,
}

impl DogApiClient {
    /// Create a client with the default base URL and 5 second timeouts.
    pub fn new() -> Result<Self> {
        Self::with_config(&DogApiConfig::default())
    }

    /// Create a client from configuration.
    pub fn with_config(config: &DogApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid Dog API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Dog API base URL cannot take path segments: {base_url}");
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("breedcache/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// Build `{base}/{breed}/list`, escaping the breed as one path segment.
    pub fn breed_url(&self, breed: &str) -> LookupResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                LookupError::Upstream(format!("Base URL cannot take path segments: {}", self.base_url))
            })?
            .pop_if_empty()
            .push(breed)
            .push(LIST_SUFFIX);
        Ok(url)
    }
}

#[async_trait]
impl BreedLookup for DogApiClient {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(&self, breed: &str) -> LookupResult<Vec<String>> {
        if breed.trim().is_empty() {
            return Err(LookupError::NotFound("Breed must be non-empty.".to_string()));
        }

        let breed = breed.to_ascii_lowercase();
        let url = self.breed_url(&breed)?;
        debug!(%url, "requesting sub-breeds");

        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!(breed = %breed, error = %e, "Dog API request failed");
            LookupError::from(e)
        })?;

        let status = resp.status();

        // 404 means NotFound even when the body is unreadable
        if status == StatusCode::NOT_FOUND {
            let body = resp.bytes().await.unwrap_or_default();
            return Err(LookupError::NotFound(not_found_message(&breed, &body)));
        }
        if !status.is_success() {
            warn!(breed = %breed, status = status.as_u16(), "Dog API returned error status");
            return Err(LookupError::Upstream(format!("HTTP {}", status.as_u16())));
        }

        let body = resp.bytes().await?;
        parse_sub_breeds(&breed, &body)
    }
}

/// Interpret a 2xx body as a sub-breed list.
pub(crate) fn parse_sub_breeds(breed: &str, body: &[u8]) -> LookupResult<Vec<String>> {
    let response: DogApiResponse = serde_json::from_slice(body)?;

    if !response.is_success() {
        let message = response
            .message_text()
            .map_or_else(|| default_not_found(breed), str::to_string);
        return Err(LookupError::NotFound(message));
    }

    serde_json::from_value(response.message)
        .map_err(|e| LookupError::Upstream(format!("Malformed sub-breed list: {e}")))
}

/// Prefer the API's own explanation on a 404, if the body carries one.
fn not_found_message(breed: &str, body: &[u8]) -> String {
    serde_json::from_slice::<DogApiResponse>(body)
        .ok()
        .and_then(|r| r.message_text().map(str::to_string))
        .unwrap_or_else(|| default_not_found(breed))
}

fn default_not_found(breed: &str) -> String {
    format!("Breed not found: {breed}")
}

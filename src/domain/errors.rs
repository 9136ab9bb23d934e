//! Domain errors for breed lookups.

use thiserror::Error;

/// Failures a [`BreedLookup`](crate::domain::ports::BreedLookup) can report.
///
/// The two variants are deliberately distinct: `NotFound` means the upstream
/// catalog does not know the breed, `Upstream` means the catalog could not be
/// reached or answered with something unusable. Neither is ever cached.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The upstream catalog does not know the breed.
    #[error("{0}")]
    NotFound(String),

    /// The catalog could not be reached or returned an unusable answer.
    #[error("Upstream lookup failed: {0}")]
    Upstream(String),
}

impl LookupError {
    /// Returns true if the breed is unknown to the upstream catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Diagnostic message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::Upstream(msg) => msg,
        }
    }
}

/// Result alias for breed lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors raised while assembling a caching lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No delegate was supplied to the builder.
    #[error("delegate lookup is required")]
    MissingDelegate,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Upstream(format!("Network error: {err}"))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Upstream(format!("Malformed response: {err}"))
    }
}

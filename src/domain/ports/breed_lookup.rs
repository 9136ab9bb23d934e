//! Breed lookup port.

use async_trait::async_trait;

use crate::domain::errors::LookupResult;

/// Resolves a breed name to its sub-breed names.
///
/// Implementations report an unknown breed as
/// [`LookupError::NotFound`](crate::domain::errors::LookupError::NotFound) and
/// anything else (network trouble, bad responses) as
/// [`LookupError::Upstream`](crate::domain::errors::LookupError::Upstream).
#[async_trait]
pub trait BreedLookup: Send + Sync {
    /// Fetch the sub-breeds of `breed`. An empty list is a valid answer.
    async fn fetch(&self, breed: &str) -> LookupResult<Vec<String>>;
}

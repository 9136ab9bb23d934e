//! Memoizing wrapper for any `BreedLookup`.
//!
//! Successful lookups are cached forever under the ASCII-lowercased breed
//! name in an unbounded `moka` cache. Failed lookups are never cached, so a
//! later call for the same breed reaches the delegate again.

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::domain::errors::{BuildError, LookupError, LookupResult};
use crate::domain::models::BreedKey;
use crate::domain::ports::BreedLookup;

/// Caching breed lookup decorator.
///
/// Concurrent misses for the same breed are coalesced into one delegate call;
/// misses for different breeds proceed in parallel.
pub struct CachingLookup<L: BreedLookup + ?Sized> {
    inner: Arc<L>,
    /// Breed key -> sub-breeds. No capacity or TTL, so entries are never evicted.
    entries: Cache<BreedKey, Arc<[String]>>,
    /// Number of delegate invocations.
    misses: AtomicU64,
}

impl<L: BreedLookup + ?Sized> CachingLookup<L> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: Arc<L>) -> Self {
        Self {
            inner,
            entries: Cache::builder().build(),
            misses: AtomicU64::new(0),
        }
    }

    /// Start building a caching lookup whose delegate is supplied later.
    pub fn builder() -> CachingLookupBuilder<L> {
        CachingLookupBuilder { delegate: None }
    }

    /// Number of times the delegate has been invoked.
    pub fn calls_made(&self) -> u64 {
        self.misses.load(Ordering::SeqCst)
    }

    /// Number of breeds currently cached.
    pub async fn cached_breeds(&self) -> u64 {
        // entry_count lags until pending housekeeping is applied
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Whether `breed` (after normalization) has a cached result.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.entries.contains_key(&BreedKey::normalize(breed))
    }
}

#[async_trait]
impl<L: BreedLookup + ?Sized + 'static> BreedLookup for CachingLookup<L> {
    async fn fetch(&self, breed: &str) -> LookupResult<Vec<String>> {
        let key = BreedKey::normalize(breed);

        if let Some(cached) = self.entries.get(&key).await {
            trace!(breed = %key, "breed cache hit");
            return Ok(cached.to_vec());
        }

        let result = self
            .entries
            .try_get_with(key.clone(), async {
                // Counted before the call so failures are counted too
                let misses = self.misses.fetch_add(1, Ordering::SeqCst) + 1;
                debug!(breed = %key, misses, "breed cache miss");

                self.inner
                    .fetch(key.as_str())
                    .await
                    .map(Arc::<[String]>::from)
            })
            .await;

        match result {
            Ok(sub_breeds) => Ok(sub_breeds.to_vec()),
            Err(err) => {
                debug!(breed = %key, error = %err, "lookup failed, not caching");
                Err((*err).clone())
            }
        }
    }
}

/// Builder for [`CachingLookup`] that rejects a missing delegate up front.
pub struct CachingLookupBuilder<L: BreedLookup + ?Sized> {
    delegate: Option<Arc<L>>,
}

impl<L: BreedLookup + ?Sized> CachingLookupBuilder<L> {
    /// Set the delegate lookup.
    pub fn delegate(mut self, delegate: Arc<L>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Set the delegate from an optional value, e.g. one resolved at runtime.
    pub fn maybe_delegate(mut self, delegate: Option<Arc<L>>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Build the lookup, failing if no delegate was supplied.
    pub fn build(self) -> Result<CachingLookup<L>, BuildError> {
        self.delegate
            .map(CachingLookup::new)
            .ok_or(BuildError::MissingDelegate)
    }
}

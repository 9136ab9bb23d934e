//! In-memory caching layer for breed lookups.
//!
//! Wraps the `BreedLookup` port as a decorator. Entries never expire and
//! only successful results are stored.

pub mod caching_lookup;

pub use caching_lookup::{CachingLookup, CachingLookupBuilder};

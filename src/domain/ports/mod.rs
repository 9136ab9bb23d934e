//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interface that lookup adapters must
//! implement:
//! - BreedLookup: resolve a breed name to its sub-breed names
//!
//! The caching decorator and the HTTP client both implement it, so callers
//! never depend on a concrete adapter.

pub mod breed_lookup;

pub use breed_lookup::BreedLookup;

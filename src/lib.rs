//! Breedcache - memoizing sub-breed lookups
//!
//! Breedcache resolves dog breed names to their sub-breeds via the Dog CEO
//! API and memoizes successful answers so repeated lookups never reach the
//! network twice.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): the `BreedLookup` port, errors and keys
//! - **Adapters** (`adapters`): the caching decorator and the HTTP client
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use breedcache::{BreedLookup, CachingLookup, DogApiClient};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let lookup = CachingLookup::new(Arc::new(DogApiClient::new()?));
//! let subs = lookup.fetch("Hound").await?;
//! let again = lookup.fetch("hound").await?;
//! assert_eq!(subs, again);
//! assert_eq!(lookup.calls_made(), 1);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachingLookup, CachingLookupBuilder};
pub use adapters::dog_api::DogApiClient;
pub use domain::errors::{BuildError, LookupError, LookupResult};
pub use domain::models::{BreedKey, Config, DogApiConfig, LoggingConfig};
pub use domain::ports::BreedLookup;
pub use infrastructure::config::{ConfigError, ConfigLoader};

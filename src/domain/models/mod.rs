//! Domain models

pub mod breed;
pub mod config;

pub use breed::BreedKey;
pub use config::{Config, DogApiConfig, LoggingConfig};

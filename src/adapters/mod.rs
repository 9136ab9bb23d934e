//! Adapters implementing the `BreedLookup` port.

pub mod cache;
pub mod dog_api;

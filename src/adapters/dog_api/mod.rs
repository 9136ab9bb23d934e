//! Dog CEO API adapter.
//!
//! Implements the `BreedLookup` port over HTTP against
//! `https://dog.ceo/api/breed/{name}/list`.

pub mod client;
pub mod models;

pub use client::DogApiClient;
pub use models::DogApiResponse;

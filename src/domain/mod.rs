//! Domain layer for breed lookups
//!
//! This module contains the lookup port, its error types and the
//! normalized breed key.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{BuildError, LookupError, LookupResult};

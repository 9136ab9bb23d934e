//! Breed key model.

use std::fmt;

/// Canonical cache key for a breed name.
///
/// Two names that differ only in ASCII case produce the same key. The fold is
/// locale-independent; non-ASCII characters are kept as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BreedKey(String);

impl BreedKey {
    /// Fold a caller-supplied breed name to its canonical key.
    pub fn normalize(name: &str) -> Self {
        Self(name.to_ascii_lowercase())
    }

    /// The folded name as sent to the upstream lookup.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

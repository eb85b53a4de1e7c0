//! Content fingerprinting for integrity comparison.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Algorithm-tagged hex digest of a text body, e.g. `sha256:9f86d0…`.
///
/// The digest covers the UTF-8 bytes of the decoded text exactly as given:
/// no truncation and no line-ending normalization. Two fingerprints are
/// equal iff tag and digest both match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Algorithm tag prefixed to every digest.
    pub const ALGORITHM: &'static str = "sha256";

    /// Fingerprint the given text.
    pub fn of_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let digest = hasher.finalize();
        Self(format!("{}:{}", Self::ALGORITHM, hex::encode(digest)))
    }

    /// The full `tag:hex` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digest without the algorithm tag.
    pub fn hex_digest(&self) -> &str {
        // The constructor always writes "tag:hex"
        &self.0[Self::ALGORITHM.len() + 1..]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

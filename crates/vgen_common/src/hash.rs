//! Content hashing for generated library artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit XXH3 digest of an emitted artifact.
///
/// Two runs of the generator over the same catalog and options must produce
/// the same `ContentHash`; `vgen check` compares the hash of a fresh render
/// against the file on disk to detect a stale library.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Hashes a byte slice with XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Hashes UTF-8 text.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// The first eight hex digits, for status lines.
    pub fn short(&self) -> String {
        self.0[..4].iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Incremental [`ContentHash`] computation over a stream of chunks.
///
/// Hashing the chunks of a text in order yields the same digest as
/// [`ContentHash::from_bytes`] over the concatenation.
pub struct ContentHasher {
    state: xxhash_rust::xxh3::Xxh3,
}

impl ContentHasher {
    /// Creates a hasher with no input.
    pub fn new() -> Self {
        Self {
            state: xxhash_rust::xxh3::Xxh3::new(),
        }
    }

    /// Feeds the next chunk.
    pub fn update(&mut self, chunk: &[u8]) {
        self.state.update(chunk);
    }

    /// The digest of everything fed so far.
    pub fn finish(&self) -> ContentHash {
        ContentHash(self.state.digest128().to_le_bytes())
    }
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.short())
    }
}

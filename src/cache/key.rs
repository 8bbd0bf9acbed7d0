//! Cache Key Module
//!
//! Derives the listing cache key from the full raw query map.

use sha2::{Digest, Sha256};

use crate::cache::KEY_PREFIX;
use crate::models::RawParams;

/// Number of digest bytes kept in the key (128 bits).
const DIGEST_BYTES: usize = 16;

// == Derive Cache Key ==
/// Hashes every raw parameter, recognized or not, into `items_<32 hex chars>`.
///
/// Parameters are fed in key order as length-prefixed key/value pairs, so the
/// byte stream is unambiguous: `{"a": "bc"}` and `{"ab": "c"}` differ.
pub fn derive_cache_key(params: &RawParams) -> String {
    let mut hasher = Sha256::new();
    hasher.update((params.len() as u64).to_le_bytes());
    for (key, value) in params.iter() {
        hasher.update((key.len() as u64).to_le_bytes());
        hasher.update(key.as_bytes());
        hasher.update((value.len() as u64).to_le_bytes());
        hasher.update(value.as_bytes());
    }
    let digest = hasher.finalize();

    format!("{}{}", KEY_PREFIX, hex::encode(&digest[..DIGEST_BYTES]))
}

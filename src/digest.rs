//! SHA256 fingerprints of captured output

use sha2::{Digest, Sha256};

/// SHA256 of `bytes` as hex with a "sha256:" prefix.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

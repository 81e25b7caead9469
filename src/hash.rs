// hash.rs — SHA-256 hashing primitive
//
// The only primitive the hasher pipeline needs at its final step: take
// canonical bytes, return a lowercase 64-char hex digest.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a byte slice and return it as a 64-char hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex_encode(&hasher.finalize())
}

/// Convert raw bytes to a lowercase hex string.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

//! Password digests
//!
//! Plain unsalted SHA-256, kept for compatibility with the original service.
//! Identical passwords always produce identical digests.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the password
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Recompute the digest and compare
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    hash_password(plain) == hashed
}

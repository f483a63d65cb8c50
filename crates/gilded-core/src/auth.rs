//! # Credential Digest
//!
//! The one-way digest applied to staff passwords before storage and
//! comparison.
//!
//! ## Storage Contract
//! Credentials are an unsalted SHA-256 hex digest of the raw password;
//! hardening (salts, KDFs, password reset) is explicitly out of scope for
//! this system. Login never compares raw passwords: both sides of the
//! comparison are digests, and the comparison happens inside a single
//! database query so a failed login cannot reveal whether the username
//! exists.

use sha2::{Digest, Sha256};

/// Computes the stored digest for a raw password.
///
/// ## Example
/// ```rust
/// use gilded_core::auth::password_digest;
///
/// let digest = password_digest("admin");
/// assert_eq!(digest.len(), 64); // hex-encoded SHA-256
/// ```
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

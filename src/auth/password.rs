//! Password hashing and verification using bcrypt
//!
//! The CMS stores bcrypt hashes with cost 12; the stock seed hash uses the
//! same parameters, so overridden passwords stay format-compatible.

use crate::types::SeedError;

/// bcrypt cost factor used for all seeded credentials
pub const BCRYPT_COST: u32 = 12;

/// Hash a password with bcrypt at the standard cost
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| SeedError::Password(format!("failed to hash password: {e}")))
}

/// Verify a password against a stored bcrypt hash
///
/// Returns true if the password matches the hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    bcrypt::verify(password, hash)
        .map_err(|e| SeedError::Password(format!("invalid password hash: {e}")))
}

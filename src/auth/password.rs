use bcrypt::{BcryptError, DEFAULT_COST};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(#[source] BcryptError),

    /// The stored hash string could not be parsed. This means the credential
    /// record is damaged and must surface as an internal error, never as a
    /// plain mismatch.
    #[error("Stored password hash is corrupt: {0}")]
    CorruptHash(#[source] BcryptError),
}

/// Hash a plaintext password for storage.
///
/// Leading/trailing whitespace is trimmed before hashing so that signup and
/// login treat padded input identically. The output is a self-describing
/// bcrypt string (`$2b$12$...`, 60 chars) embedding algorithm, cost and salt.
/// No minimum-length policy here; that belongs to the signup handler.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    bcrypt::hash(password.trim(), DEFAULT_COST).map_err(PasswordError::Hash)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// The salt and cost are taken from the stored hash and the digests are
/// compared in constant time by the bcrypt primitive. A mismatch is
/// `Ok(false)`; a malformed stored hash is a hard error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password.trim(), stored_hash).map_err(PasswordError::CorruptHash)
}

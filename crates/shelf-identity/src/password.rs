//! Salted one-way password hashing (Argon2id, default cost parameters).

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, password_hash};

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("could not hash password: {0}")]
    Hashing(String),
    #[error("stored credential is malformed: {0}")]
    MalformedCredential(String),
    #[error("could not sign token: {0}")]
    Signing(String),
}

/// Hash `plaintext` with a fresh random salt. The result is a PHC string that
/// embeds algorithm, parameters and salt.
pub fn hash_password(plaintext: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hashing(e.to_string()))
}

/// Check `plaintext` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only an unparseable credential is an error.
pub fn verify_password(plaintext: &str, credential: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(credential)
        .map_err(|e| CredentialError::MalformedCredential(e.to_string()))?;
    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CredentialError::MalformedCredential(e.to_string())),
    }
}

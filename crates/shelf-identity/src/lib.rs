//! Password credentials and signed bearer tokens for Shelf accounts.
//!
//! [`CredentialManager`] is built once at startup from the configured signing
//! secret and shared by value (it is cheap to clone). It has no knowledge of
//! storage: callers persist the hash strings it produces.

pub mod password;
pub mod token;

use uuid::Uuid;

pub use password::CredentialError;
pub use token::{TokenClaims, TokenError, TokenSigner};

/// Hashes and verifies passwords, issues and validates tokens.
#[derive(Clone)]
pub struct CredentialManager {
    signer: TokenSigner,
}

impl CredentialManager {
    pub fn new(secret: &str) -> Self {
        Self {
            signer: TokenSigner::new(secret),
        }
    }

    pub fn hash_password(&self, plaintext: &str) -> Result<String, CredentialError> {
        password::hash_password(plaintext)
    }

    pub fn verify_password(&self, plaintext: &str, credential: &str) -> Result<bool, CredentialError> {
        password::verify_password(plaintext, credential)
    }

    pub fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, CredentialError> {
        self.signer.issue(user_id, email)
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.signer.validate(token)
    }
}

impl std::fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialManager").finish_non_exhaustive()
    }
}

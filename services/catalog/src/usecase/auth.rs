use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use shelf_identity::CredentialManager;

use crate::domain::repository::{ImageSource, UserRepository};
use crate::domain::types::{DEFAULT_ROLE, User};
use crate::error::CatalogServiceError;

fn require_credentials(email: &str, password: &str) -> Result<(), CatalogServiceError> {
    if email.is_empty() || password.is_empty() {
        return Err(CatalogServiceError::validation(
            "email and password are required",
        ));
    }
    Ok(())
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    /// Remote avatar to ingest. Blank or missing falls back to the default.
    pub avatar_url: Option<String>,
}

pub struct RegisterUseCase<U: UserRepository, I: ImageSource> {
    pub users: U,
    pub images: I,
    pub credentials: CredentialManager,
    pub default_avatar_url: String,
}

impl<U: UserRepository, I: ImageSource> RegisterUseCase<U, I> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, CatalogServiceError> {
        require_credentials(&input.email, &input.password)?;

        let password_hash = self
            .credentials
            .hash_password(&input.password)
            .map_err(CatalogServiceError::Hashing)?;

        let avatar_url = input
            .avatar_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.default_avatar_url.clone());
        let avatar = self.images.fetch_inline(&avatar_url).await?;

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            password_hash,
            name: input.name,
            role: DEFAULT_ROLE.to_owned(),
            avatar: Some(avatar),
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: Uuid,
    pub token: String,
}

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub credentials: CredentialManager,
}

impl<U: UserRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, CatalogServiceError> {
        require_credentials(&input.email, &input.password)?;

        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(CatalogServiceError::AccountNotFound)?;

        let matches = self
            .credentials
            .verify_password(&input.password, &user.password_hash)
            .map_err(CatalogServiceError::Hashing)?;
        if !matches {
            return Err(CatalogServiceError::IncorrectPassword);
        }

        let token = self
            .credentials
            .issue_token(user.id, &user.email)
            .map_err(CatalogServiceError::TokenSigning)?;

        Ok(LoginOutput {
            user_id: user.id,
            token,
        })
    }
}

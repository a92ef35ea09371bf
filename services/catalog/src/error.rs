use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use shelf_identity::CredentialError;

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("user not found")]
    AccountNotFound,
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("user not found")]
    UserNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("review not found")]
    ReviewNotFound,
    #[error("{0}")]
    Conflict(&'static str),
    #[error("failed to load image")]
    ImageFetch(#[source] anyhow::Error),
    #[error("failed to load image")]
    ImageRead(#[source] anyhow::Error),
    #[error("could not hash password")]
    Hashing(#[source] CredentialError),
    #[error("could not generate token")]
    TokenSigning(#[source] CredentialError),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::ReviewNotFound => "REVIEW_NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::ImageFetch(_) => "IMAGE_FETCH",
            Self::ImageRead(_) => "IMAGE_READ",
            Self::Hashing(_) => "HASHING",
            Self::TokenSigning(_) => "TOKEN_SIGNING",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // Uniqueness violations answer 400, not 409: clients already depend on it.
            Self::Validation(_)
            | Self::AccountNotFound
            | Self::IncorrectPassword
            | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::ProductNotFound | Self::ReviewNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::ImageFetch(_)
            | Self::ImageRead(_)
            | Self::Hashing(_)
            | Self::TokenSigning(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client errors and TraceLayer already records them.
        if status.is_server_error() {
            tracing::error!(error = ?self, kind = self.kind(), "internal error");
        }
        let body = serde_json::json!({
            "ok": false,
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::User;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::user::GetUserUseCase;

/// Public view of an account. The password hash is never part of it.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub avatar: Option<String>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── GET /api/user/{id} ───────────────────────────────────────────────────────

/// Legacy endpoint: answers the bare user object, or a bare-text 404.
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    match usecase.execute(&id).await {
        Ok(user) => Json(UserResponse::from(user)).into_response(),
        Err(CatalogServiceError::UserNotFound) => {
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
        Err(err) => err.into_response(),
    }
}

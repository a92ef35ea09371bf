use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::error::CatalogServiceError;
use crate::handlers::json_body;
use crate::state::AppState;
use crate::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Remote URL of the avatar to ingest.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub ok: bool,
    pub message: &'static str,
}

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, CatalogServiceError> {
    let body = json_body(body)?;
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        images: state.image_source(),
        credentials: state.credentials.clone(),
        default_avatar_url: state.default_avatar_url.clone(),
    };
    usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
            avatar_url: body.avatar,
        })
        .await?;
    Ok(Json(RegisterResponse {
        ok: true,
        message: "User registered successfully",
    }))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, CatalogServiceError> {
    let body = json_body(body)?;
    let usecase = LoginUseCase {
        users: state.user_repo(),
        credentials: state.credentials.clone(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(LoginResponse {
        ok: true,
        token: output.token,
    }))
}

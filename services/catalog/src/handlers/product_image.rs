use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::ProductImage;
use crate::error::CatalogServiceError;
use crate::handlers::json_body;
use crate::state::AppState;
use crate::usecase::product_image::{AttachImageInput, AttachImageUseCase};

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub alt: Option<String>,
    pub position: i32,
}

impl From<ProductImage> for ImageResponse {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id,
            product_id: image.product_id,
            url: image.url,
            alt: image.alt,
            position: image.position,
        }
    }
}

// ── POST /api/upload-image-product ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct UploadImageRequest {
    #[serde(default, rename = "productID")]
    pub product_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub position: Option<i32>,
}

#[derive(Serialize)]
pub struct UploadImageResponse {
    pub ok: bool,
    pub message: &'static str,
    pub image: ImageResponse,
}

pub async fn upload_product_image(
    State(state): State<AppState>,
    body: Result<Json<UploadImageRequest>, JsonRejection>,
) -> Result<Json<UploadImageResponse>, CatalogServiceError> {
    let body = json_body(body)?;
    let usecase = AttachImageUseCase {
        images: state.product_image_repo(),
        source: state.image_source(),
    };
    let image = usecase
        .execute(AttachImageInput {
            product_id: body.product_id,
            url: body.url,
            alt: body.alt,
            position: body.position,
        })
        .await?;
    Ok(Json(UploadImageResponse {
        ok: true,
        message: "Upload image successfully",
        image: image.into(),
    }))
}

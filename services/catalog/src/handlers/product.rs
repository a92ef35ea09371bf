use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Product, ProductDetail};
use crate::error::CatalogServiceError;
use crate::handlers::product_image::ImageResponse;
use crate::handlers::review::ReviewResponse;
use crate::handlers::{IdQuery, json_body, query_params};
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductInput, UpdateProductUseCase,
};

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub sku: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub images: Vec<ImageResponse>,
    pub reviews: Vec<ReviewResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
            images: vec![],
            reviews: vec![],
        }
    }
}

impl From<ProductDetail> for ProductResponse {
    fn from(detail: ProductDetail) -> Self {
        let mut response = Self::from(detail.product);
        response.images = detail.images.into_iter().map(ImageResponse::from).collect();
        response.reviews = detail
            .reviews
            .into_iter()
            .map(ReviewResponse::from)
            .collect();
        response
    }
}

/// Product body. Absent or `null` numbers count as zero.
#[derive(Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<i32>,
}

impl From<ProductRequest> for ProductInput {
    fn from(body: ProductRequest) -> Self {
        Self {
            sku: body.sku,
            name: body.name,
            description: body.description,
            price: body.price.unwrap_or_default(),
            stock: body.stock.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
pub struct ProductMutationResponse {
    pub ok: bool,
    pub message: &'static str,
    pub product: ProductResponse,
}

// ── GET /api/all-product ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProductListResponse {
    pub ok: bool,
    pub products: Vec<ProductResponse>,
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, CatalogServiceError> {
    let usecase = ListProductsUseCase {
        products: state.product_repo(),
    };
    let products = usecase.execute().await?;
    Ok(Json(ProductListResponse {
        ok: true,
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

// ── GET /api/product?id= ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProductEnvelope {
    pub ok: bool,
    pub product: ProductResponse,
}

pub async fn get_product(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<ProductEnvelope>, CatalogServiceError> {
    let query = query_params(query)?;
    let usecase = GetProductUseCase {
        products: state.product_repo(),
    };
    let detail = usecase.execute(&query.id).await?;
    Ok(Json(ProductEnvelope {
        ok: true,
        product: detail.into(),
    }))
}

// ── POST /api/product/create ─────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductMutationResponse>, CatalogServiceError> {
    let body = json_body(body)?;
    let usecase = CreateProductUseCase {
        products: state.product_repo(),
    };
    let product = usecase.execute(body.into()).await?;
    Ok(Json(ProductMutationResponse {
        ok: true,
        message: "Product created successfully",
        product: product.into(),
    }))
}

// ── PATCH /api/product/update?id= ────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<ProductMutationResponse>, CatalogServiceError> {
    let query = query_params(query)?;
    let usecase = UpdateProductUseCase {
        products: state.product_repo(),
    };
    // The id and the stored row are checked before the body is looked at.
    let product = usecase.load(&query.id).await?;
    let body = json_body(body)?;
    let product = usecase.apply(product, body.into()).await?;
    Ok(Json(ProductMutationResponse {
        ok: true,
        message: "Product updated successfully",
        product: product.into(),
    }))
}

// ── DELETE /api/product/delete?id= ───────────────────────────────────────────

#[derive(Serialize)]
pub struct MessageResponse {
    pub ok: bool,
    pub message: &'static str,
}

pub async fn delete_product(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let query = query_params(query)?;
    let usecase = DeleteProductUseCase {
        products: state.product_repo(),
    };
    usecase.execute(&query.id).await?;
    Ok(Json(MessageResponse {
        ok: true,
        message: "Product deleted successfully",
    }))
}

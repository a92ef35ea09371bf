use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Patch, Review, ReviewWithAuthor};
use crate::error::CatalogServiceError;
use crate::handlers::product::MessageResponse;
use crate::handlers::user::UserResponse;
use crate::handlers::{IdQuery, json_body, query_params};
use crate::state::AppState;
use crate::usecase::review::{
    CreateReviewInput, CreateReviewUseCase, DeleteReviewUseCase, ListAllReviewsUseCase,
    ListReviewsForProductUseCase, ProductReviews, UpdateReviewInput, UpdateReviewUseCase,
};

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub body: String,
    pub rating: i32,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "shelf_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Author, when resolved. `null` if the account is gone.
    pub user: Option<UserResponse>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            product_id: review.product_id,
            user_id: review.user_id,
            title: review.title,
            body: review.body,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
            user: None,
        }
    }
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(entry: ReviewWithAuthor) -> Self {
        let mut response = Self::from(entry.review);
        response.user = entry.author.map(UserResponse::from);
        response
    }
}

#[derive(Serialize)]
pub struct ReviewMutationResponse {
    pub ok: bool,
    pub message: &'static str,
    pub review: ReviewResponse,
}

// ── GET /api/all-reviews ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReviewListResponse {
    pub ok: bool,
    pub reviews: Vec<ReviewResponse>,
    pub count: usize,
}

pub async fn list_all_reviews(
    State(state): State<AppState>,
) -> Result<Json<ReviewListResponse>, CatalogServiceError> {
    let usecase = ListAllReviewsUseCase {
        reviews: state.review_repo(),
    };
    let reviews: Vec<ReviewResponse> = usecase
        .execute()
        .await?
        .into_iter()
        .map(ReviewResponse::from)
        .collect();
    Ok(Json(ReviewListResponse {
        ok: true,
        count: reviews.len(),
        reviews,
    }))
}

// ── GET /api/review?productId= ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ProductReviewsQuery {
    #[serde(default, rename = "productId")]
    pub product_id: String,
}

#[derive(Serialize)]
pub struct ProductReviewsResponse {
    pub ok: bool,
    pub reviews: Vec<ReviewResponse>,
    pub count: usize,
    /// The `productId` parameter exactly as the client sent it.
    pub product_id: String,
    /// Display name of the product.
    pub product: String,
}

impl ProductReviewsResponse {
    fn new(raw_product_id: String, found: ProductReviews) -> Self {
        let reviews: Vec<ReviewResponse> = found
            .reviews
            .into_iter()
            .map(ReviewResponse::from)
            .collect();
        Self {
            ok: true,
            count: reviews.len(),
            reviews,
            product_id: raw_product_id,
            product: found.product.name,
        }
    }
}

pub async fn list_product_reviews(
    State(state): State<AppState>,
    query: Result<Query<ProductReviewsQuery>, QueryRejection>,
) -> Result<Json<ProductReviewsResponse>, CatalogServiceError> {
    let query = query_params(query)?;
    let usecase = ListReviewsForProductUseCase {
        products: state.product_repo(),
        reviews: state.review_repo(),
    };
    let found = usecase.execute(&query.product_id).await?;
    Ok(Json(ProductReviewsResponse::new(query.product_id, found)))
}

// ── POST /api/add-review ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    #[serde(default, rename = "productID")]
    pub product_id: String,
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub rating: i32,
}

pub async fn create_review(
    State(state): State<AppState>,
    body: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewMutationResponse>, CatalogServiceError> {
    let body = json_body(body)?;
    let usecase = CreateReviewUseCase {
        reviews: state.review_repo(),
    };
    let review = usecase
        .execute(CreateReviewInput {
            product_id: body.product_id,
            user_id: body.user_id,
            title: body.title,
            body: body.body,
            rating: body.rating,
        })
        .await?;
    Ok(Json(ReviewMutationResponse {
        ok: true,
        message: "Review created successfully",
        review: review.into(),
    }))
}

// ── PATCH /api/update-review?id= ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateReviewRequest {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub body: Patch<String>,
    #[serde(default)]
    pub rating: Patch<i32>,
}

pub async fn update_review(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    body: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewMutationResponse>, CatalogServiceError> {
    let query = query_params(query)?;
    let usecase = UpdateReviewUseCase {
        reviews: state.review_repo(),
    };
    let review = usecase.load(&query.id).await?;
    let body = json_body(body)?;
    let review = usecase
        .apply(
            review,
            UpdateReviewInput {
                title: body.title,
                body: body.body,
                rating: body.rating,
            },
        )
        .await?;
    Ok(Json(ReviewMutationResponse {
        ok: true,
        message: "Review updated successfully",
        review: review.into(),
    }))
}

// ── DELETE /api/delete-review?id= ────────────────────────────────────────────

pub async fn delete_review(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let query = query_params(query)?;
    let usecase = DeleteReviewUseCase {
        reviews: state.review_repo(),
    };
    usecase.execute(&query.id).await?;
    Ok(Json(MessageResponse {
        ok: true,
        message: "Review deleted successfully",
    }))
}

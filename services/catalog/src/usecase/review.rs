use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{ProductRepository, ReviewRepository};
use crate::domain::types::{Patch, Product, Review, ReviewWithAuthor, is_valid_rating};
use crate::domain::validation::require_id;
use crate::error::CatalogServiceError;

const REVIEW_ID: &str = "review ID";

fn check_rating(rating: i32) -> Result<(), CatalogServiceError> {
    if !is_valid_rating(rating) {
        return Err(CatalogServiceError::validation(
            "rating must be between 1 and 5",
        ));
    }
    Ok(())
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub product_id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub body: String,
    pub rating: i32,
}

pub struct CreateReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> CreateReviewUseCase<R> {
    pub async fn execute(&self, input: CreateReviewInput) -> Result<Review, CatalogServiceError> {
        if input.product_id.is_empty() {
            return Err(CatalogServiceError::validation("product ID is required"));
        }
        if input.user_id.is_empty() {
            return Err(CatalogServiceError::validation("user ID is required"));
        }
        let product_id = require_id(&input.product_id, "product ID")?;
        let user_id = require_id(&input.user_id, "user ID")?;
        check_rating(input.rating)?;
        if input.body.is_empty() {
            return Err(CatalogServiceError::validation("review body is required"));
        }

        let now = Utc::now();
        let review = Review {
            id: Uuid::now_v7(),
            product_id,
            user_id,
            title: input.title,
            body: input.body,
            rating: input.rating,
            created_at: now,
            updated_at: now,
        };
        self.reviews.create(&review).await?;

        info!(review_id = %review.id, %product_id, %user_id, "review created");
        Ok(review)
    }
}

// ── ListReviewsForProduct ────────────────────────────────────────────────────

pub struct ProductReviews {
    pub product: Product,
    pub reviews: Vec<ReviewWithAuthor>,
}

pub struct ListReviewsForProductUseCase<P: ProductRepository, R: ReviewRepository> {
    pub products: P,
    pub reviews: R,
}

impl<P: ProductRepository, R: ReviewRepository> ListReviewsForProductUseCase<P, R> {
    pub async fn execute(&self, raw_product_id: &str) -> Result<ProductReviews, CatalogServiceError> {
        let product_id = require_id(raw_product_id, "product ID")?;
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(CatalogServiceError::ProductNotFound)?;
        let reviews = self.reviews.list_by_product_with_authors(product_id).await?;
        Ok(ProductReviews { product, reviews })
    }
}

// ── ListAllReviews ───────────────────────────────────────────────────────────

pub struct ListAllReviewsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> ListAllReviewsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<ReviewWithAuthor>, CatalogServiceError> {
        self.reviews.list_with_authors().await
    }
}

// ── UpdateReview ─────────────────────────────────────────────────────────────

/// Partial update: only present fields are written. An empty string is
/// present and overwrites.
#[derive(Debug, Default)]
pub struct UpdateReviewInput {
    pub title: Patch<String>,
    pub body: Patch<String>,
    pub rating: Patch<i32>,
}

pub struct UpdateReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> UpdateReviewUseCase<R> {
    pub async fn execute(
        &self,
        raw_id: &str,
        input: UpdateReviewInput,
    ) -> Result<Review, CatalogServiceError> {
        let review = self.load(raw_id).await?;
        self.apply(review, input).await
    }

    /// Parses the id and fetches the stored review.
    pub async fn load(&self, raw_id: &str) -> Result<Review, CatalogServiceError> {
        let id = require_id(raw_id, REVIEW_ID)?;
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ReviewNotFound)
    }

    pub async fn apply(
        &self,
        mut review: Review,
        input: UpdateReviewInput,
    ) -> Result<Review, CatalogServiceError> {
        if let Patch::Present(title) = input.title {
            review.title = Some(title);
        }
        if let Patch::Present(body) = input.body {
            review.body = body;
        }
        if let Patch::Present(rating) = input.rating {
            check_rating(rating)?;
            review.rating = rating;
        }
        review.updated_at = Utc::now();

        self.reviews.save(&review).await?;
        Ok(review)
    }
}

// ── DeleteReview ─────────────────────────────────────────────────────────────

pub struct DeleteReviewUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> DeleteReviewUseCase<R> {
    pub async fn execute(&self, raw_id: &str) -> Result<(), CatalogServiceError> {
        let id = require_id(raw_id, REVIEW_ID)?;
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ReviewNotFound)?;
        self.reviews.delete(id).await?;

        info!(review_id = %id, "review deleted");
        Ok(())
    }
}

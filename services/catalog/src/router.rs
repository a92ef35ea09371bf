use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;

use shelf_core::health::healthz;
use shelf_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    auth::{login, register},
    health::readyz,
    product::{create_product, delete_product, get_product, list_products, update_product},
    product_image::upload_product_image,
    review::{create_review, delete_review, list_all_reviews, list_product_reviews, update_review},
    user::get_user,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Users
        .route("/api/user/{id}", get(get_user))
        // Products
        .route("/api/all-product", get(list_products))
        .route("/api/product", get(get_product))
        .route("/api/product/create", post(create_product))
        .route("/api/product/update", patch(update_product))
        .route("/api/product/delete", delete(delete_product))
        // Product images
        .route("/api/upload-image-product", post(upload_product_image))
        // Reviews
        .route("/api/all-reviews", get(list_all_reviews))
        .route("/api/review", get(list_product_reviews))
        .route("/api/add-review", post(create_review))
        .route("/api/update-review", patch(update_review))
        .route("/api/delete-review", delete(delete_review))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}

pub mod auth;
pub mod health;
pub mod product;
pub mod product_image;
pub mod review;
pub mod user;

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use serde::Deserialize;

use crate::error::CatalogServiceError;

/// Unwrap a JSON body, reporting any parse or content-type failure as a
/// validation error in the service envelope.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, CatalogServiceError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected request body");
        CatalogServiceError::validation("invalid JSON body")
    })
}

/// Unwrap a query string. Repeated or malformed parameters are a validation
/// error in the service envelope rather than axum's plain-text rejection.
pub(crate) fn query_params<T>(
    query: Result<Query<T>, QueryRejection>,
) -> Result<T, CatalogServiceError> {
    query.map(|Query(value)| value).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected query string");
        CatalogServiceError::validation("invalid query string")
    })
}

/// `?id=` query used by the product and review endpoints. Missing is blank.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: String,
}

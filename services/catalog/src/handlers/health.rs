use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Ready once the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    shelf_core::health::readiness(state.db.ping().await)
}

use std::fmt::Display;

use axum::http::StatusCode;

/// Handler for `GET /healthz`: the process is up and answering.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Translate a dependency probe into the status returned by `GET /readyz`.
///
/// Services run their own checks (database ping and so on) and hand the
/// outcome here so every service reports readiness the same way.
pub fn readiness<E: Display>(probe: Result<(), E>) -> StatusCode {
    match probe {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

use axum::http::StatusCode;

/// Liveness probe. Does not touch the greenhouse API.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

use crate::transport::http::handlers::common::message;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (DB reachable)", body = crate::transport::http::types::ApiResponse),
        (status = 503, description = "Service is unhealthy (DB unreachable)", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.bank_service.store().ping().await {
        Ok(()) => message(StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            message(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("DB ping failed: {}", e),
            )
        }
    }
}

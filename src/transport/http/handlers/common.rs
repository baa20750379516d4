use crate::storage::StorageError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::Json;

pub type MessageResponse = (StatusCode, Json<ApiResponse>);

pub fn message(status: StatusCode, text: impl Into<String>) -> MessageResponse {
    (status, Json(ApiResponse::new(text)))
}

/// Maps a storage failure to its HTTP status, keeping the error text as the message.
pub fn storage_error(err: &StorageError) -> MessageResponse {
    let status = match err {
        StorageError::SwiftCodeNotFound | StorageError::CountryNotFound => StatusCode::NOT_FOUND,
        StorageError::SwiftCodeExists => StatusCode::BAD_REQUEST,
        StorageError::Database(e) => {
            tracing::error!(error = %e, "storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    message(status, err.to_string())
}

use crate::app::bank_service::ServiceError;
use crate::domain::model::BankPayload;
use crate::transport::http::handlers::common::{message, storage_error};
use crate::transport::http::types::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/v1/swift-codes/{swiftCode}",
    params(
        ("swiftCode" = String, Path, description = "8 or 11 character SWIFT code")
    ),
    responses(
        (status = 200, description = "Bank details (headquarters include branches)", body = crate::domain::model::Bank),
        (status = 400, description = "Malformed SWIFT code", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "SWIFT code not found", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_swift_code_handler(
    State(state): State<AppState>,
    Path(swift_code): Path<String>,
) -> impl IntoResponse {
    if !state.bank_service.is_valid_swift_code(&swift_code) {
        return message(StatusCode::BAD_REQUEST, "swiftCode is invalid").into_response();
    }

    match state.bank_service.get_bank(&swift_code).await {
        Ok(bank) => (StatusCode::OK, Json(bank)).into_response(),
        Err(e) => storage_error(&e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/swift-codes/country/{countryISO2code}",
    params(
        ("countryISO2code" = String, Path, description = "Uppercase ISO 3166-1 alpha-2 code")
    ),
    responses(
        (status = 200, description = "Every bank stored for the country", body = crate::domain::model::CountryBanks),
        (status = 400, description = "Unknown or malformed country code", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "No banks stored for the country", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_country_swift_codes_handler(
    State(state): State<AppState>,
    Path(country_iso2): Path<String>,
) -> impl IntoResponse {
    if !state.bank_service.is_valid_country_code(&country_iso2) {
        return message(StatusCode::BAD_REQUEST, "countryISO2code is invalid").into_response();
    }

    match state.bank_service.get_country_banks(&country_iso2).await {
        Ok(country) => (StatusCode::OK, Json(country)).into_response(),
        Err(e) => storage_error(&e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/v1/swift-codes",
    request_body = BankPayload,
    responses(
        (status = 200, description = "Bank added", body = crate::transport::http::types::ApiResponse),
        (status = 400, description = "Invalid body, failed validation or duplicate code", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn add_swift_code_handler(
    State(state): State<AppState>,
    request: Result<Json<BankPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match request {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "rejected request body");
            return message(StatusCode::BAD_REQUEST, "Error parsing request body");
        }
    };

    match state.bank_service.add_bank(payload).await {
        Ok(bank) => message(
            StatusCode::OK,
            format!("Successfully added bank with swift code {}", bank.swift_code),
        ),
        Err(ServiceError::Validation(e)) => message(StatusCode::BAD_REQUEST, e.to_string()),
        Err(ServiceError::Storage(e)) => storage_error(&e),
    }
}

#[utoipa::path(
    delete,
    path = "/v1/swift-codes/{swiftCode}",
    params(
        ("swiftCode" = String, Path, description = "8 or 11 character SWIFT code")
    ),
    responses(
        (status = 200, description = "Bank deleted", body = crate::transport::http::types::ApiResponse),
        (status = 400, description = "Malformed SWIFT code", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "SWIFT code not found", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Internal server error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn delete_swift_code_handler(
    State(state): State<AppState>,
    Path(swift_code): Path<String>,
) -> impl IntoResponse {
    if !state.bank_service.is_valid_swift_code(&swift_code) {
        return message(StatusCode::BAD_REQUEST, "swiftCode is invalid");
    }

    match state.bank_service.delete_bank(&swift_code).await {
        Ok(()) => message(
            StatusCode::OK,
            format!("Bank with swift code: {} has been deleted", swift_code),
        ),
        Err(e) => storage_error(&e),
    }
}

use crate::domain::model::{Bank, BankBranch, BankPayload, CountryBanks};
use crate::transport::http::handlers::{health, swift_codes};
use crate::transport::http::types::ApiResponse;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        swift_codes::get_swift_code_handler,
        swift_codes::get_country_swift_codes_handler,
        swift_codes::add_swift_code_handler,
        swift_codes::delete_swift_code_handler
    ),
    components(schemas(ApiResponse, Bank, BankBranch, BankPayload, CountryBanks))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/v1/swift-codes", post(swift_codes::add_swift_code_handler))
        .route(
            "/v1/swift-codes/country/:country_iso2",
            get(swift_codes::get_country_swift_codes_handler),
        )
        .route(
            "/v1/swift-codes/:swift_code",
            get(swift_codes::get_swift_code_handler).delete(swift_codes::delete_swift_code_handler),
        )
        .with_state(app_state)
}

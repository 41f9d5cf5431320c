// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::{
    controllers::constants,
    openapi::{self, StatusResponse},
};
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the read-only router. An `*` entry in the allowed origins opens CORS
/// to any origin; entries that are not valid header values are skipped.
#[must_use]
pub fn build_router(config: &AppConfig) -> Router {
    let allow_origin = if config.allowed_origins().iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins()
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(%origin, error = %err, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .max_age(config.cors_max_age());

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/constants", get(constants::list_constants))
        .route(
            "/api/v1/constants/error-types",
            get(constants::list_error_types),
        )
        .route(
            "/api/v1/constants/error-types/{name}",
            get(constants::get_error_type),
        )
        .route(
            "/api/v1/constants/status-codes",
            get(constants::list_status_codes),
        )
        .route(
            "/api/v1/constants/status-codes/{name}",
            get(constants::get_status_code),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

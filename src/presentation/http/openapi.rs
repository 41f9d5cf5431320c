// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::constants::list_constants,
        crate::presentation::http::controllers::constants::list_error_types,
        crate::presentation::http::controllers::constants::get_error_type,
        crate::presentation::http::controllers::constants::list_status_codes,
        crate::presentation::http::controllers::constants::get_status_code,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::constants::RegistryResponse,
            crate::presentation::http::controllers::constants::ErrorTypeEntry,
            crate::presentation::http::controllers::constants::StatusCodeEntry
        )
    ),
    tags(
        (name = "Constants", description = "Shared error types and status codes"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "App Constants API",
        description = "Read-only registry of error types and status codes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

#[must_use]
pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

/// Snapshot destination: `OPENAPI_SNAPSHOT_PATH`, or `spec/openapi.json`.
#[must_use]
pub fn snapshot_path_from_env() -> PathBuf {
    env::var_os("OPENAPI_SNAPSHOT_PATH")
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from)
}

/// Write the pretty-printed OpenAPI document to `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns any I/O error from creating the directories or the file, or from
/// serializing the document into it.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}

// src/presentation/http/controllers/constants.rs
use crate::domain::constants::{AppStatus, ErrorTypes, StatusClass, StatusCodes};
use crate::presentation::http::error::HttpResult;
use axum::{Json, extract::Path};
use serde::{Serialize, Serializer, ser::SerializeMap};
use utoipa::ToSchema;

/// Serializes a registry table as a JSON object, keeping declaration order.
#[derive(Debug, Clone, Copy)]
pub struct RegistryTable<V: 'static>(pub &'static [(&'static str, V)]);

impl<V: Serialize> Serialize for RegistryTable<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistryResponse {
    #[schema(value_type = std::collections::HashMap<String, String>)]
    pub error_types: RegistryTable<&'static str>,
    #[schema(value_type = std::collections::HashMap<String, u16>)]
    pub status_codes: RegistryTable<u16>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorTypeEntry {
    pub name: String,
    #[schema(value_type = String)]
    pub value: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCodeEntry {
    #[schema(value_type = String)]
    pub name: &'static str,
    pub code: u16,
    #[schema(value_type = String)]
    pub class: StatusClass,
}

impl From<AppStatus> for StatusCodeEntry {
    fn from(status: AppStatus) -> Self {
        Self {
            name: status.name(),
            code: status.code(),
            class: status.class(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/constants",
    responses(
        (status = 200, description = "Both constant namespaces keyed by name.", body = RegistryResponse)
    ),
    tag = "Constants"
)]
pub async fn list_constants() -> Json<RegistryResponse> {
    Json(RegistryResponse {
        error_types: RegistryTable(&ErrorTypes::ENTRIES),
        status_codes: RegistryTable(&StatusCodes::ENTRIES),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/constants/error-types",
    responses(
        (status = 200, description = "Error type labels keyed by name.", body = std::collections::HashMap<String, String>)
    ),
    tag = "Constants"
)]
pub async fn list_error_types() -> Json<RegistryTable<&'static str>> {
    Json(RegistryTable(&ErrorTypes::ENTRIES))
}

#[utoipa::path(
    get,
    path = "/api/v1/constants/error-types/{name}",
    params(("name" = String, Path, description = "Constant name, e.g. VALIDATION_ERROR")),
    responses(
        (status = 200, description = "Error type label.", body = ErrorTypeEntry),
        (status = 404, description = "No such error type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Constants"
)]
/// Look up one error type by its constant name.
///
/// # Errors
///
/// Responds 404 when `name` is not an error type.
pub async fn get_error_type(Path(name): Path<String>) -> HttpResult<Json<ErrorTypeEntry>> {
    let value = ErrorTypes::lookup(&name)?;
    Ok(Json(ErrorTypeEntry { name, value }))
}

#[utoipa::path(
    get,
    path = "/api/v1/constants/status-codes",
    responses(
        (status = 200, description = "Status codes keyed by name.", body = std::collections::HashMap<String, u16>)
    ),
    tag = "Constants"
)]
pub async fn list_status_codes() -> Json<RegistryTable<u16>> {
    Json(RegistryTable(&StatusCodes::ENTRIES))
}

#[utoipa::path(
    get,
    path = "/api/v1/constants/status-codes/{name}",
    params(("name" = String, Path, description = "Constant name, e.g. NOT_FOUND")),
    responses(
        (status = 200, description = "Status code with its class.", body = StatusCodeEntry),
        (status = 404, description = "No such status code.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Constants"
)]
/// Look up one status code by its constant name.
///
/// # Errors
///
/// Responds 404 when `name` is not a status code.
pub async fn get_status_code(Path(name): Path<String>) -> HttpResult<Json<StatusCodeEntry>> {
    let status: AppStatus = name.parse()?;
    Ok(Json(StatusCodeEntry::from(status)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keeps_declaration_order() {
        let json = serde_json::to_string(&RegistryTable(&StatusCodes::ENTRIES)).unwrap();
        assert!(json.starts_with(r#"{"SUCCESS":200,"CREATED":201,"ACCEPTED":202"#));
        assert!(json.ends_with(r#""INTERNAL_SERVER_ERROR":500}"#));
    }

    #[test]
    fn status_entry_carries_class() {
        let json = serde_json::to_value(StatusCodeEntry::from(AppStatus::Unauthorized)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "UNAUTHORIZED", "code": 401, "class": "client_error" })
        );
    }
}

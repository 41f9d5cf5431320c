// src/presentation/http/error.rs
use crate::domain::{constants::AppStatus, errors::DomainError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: AppStatus,
    message: String,
}

impl HttpError {
    #[must_use]
    pub fn from_error(err: &DomainError) -> Self {
        match err {
            DomainError::UnknownName { .. }
            | DomainError::UnknownErrorType(_)
            | DomainError::UnknownStatusCode(_) => Self::new(AppStatus::NotFound, err.to_string()),
        }
    }

    const fn new(status: AppStatus, message: String) -> Self {
        Self { status, message }
    }

    #[must_use]
    pub const fn status(&self) -> AppStatus {
        self.status
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from_error(&err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(self.status);
        tracing::debug!(status = %self.status, message = %self.message, "request failed");
        let payload = ErrorResponse {
            error: status.canonical_reason().unwrap_or("error").to_string(),
            message: self.message,
        };
        (status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;

    #[test]
    fn lookup_failures_map_to_not_found() {
        let errors = [
            DomainError::UnknownName {
                namespace: "StatusCodes",
                name: "TEAPOT".into(),
            },
            DomainError::UnknownErrorType("CONFLICT_ERROR".into()),
            DomainError::UnknownStatusCode(418),
        ];
        for err in errors {
            assert_eq!(HttpError::from(err).status(), AppStatus::NotFound);
        }
    }

    #[tokio::test]
    async fn renders_canonical_reason_and_message() {
        let resp = HttpError::from(DomainError::UnknownStatusCode(418)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Not Found", "message": "unknown status code 418" })
        );
    }
}

// tests/support/helpers.rs
use app_constants::config::AppConfig;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn make_test_router() -> axum::Router {
    make_router_with(&AppConfig::default())
}

pub fn make_router_with(config: &AppConfig) -> axum::Router {
    app_constants::presentation::http::routes::build_router(config)
}

/// Send `GET /health` with an `Origin` header and return the
/// `access-control-allow-origin` response header, if any.
pub async fn allowed_origin_for(config: &AppConfig, origin: &str) -> Option<String> {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap();

    let resp = make_router_with(config).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

/// Send a GET request through a fresh router and return status plus JSON body.
pub async fn get_json(uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = make_test_router().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status and error string.
pub async fn assert_error_response(uri: &str, expected_status: StatusCode, expected_error: &str) {
    let (status, json) = get_json(uri).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tabletop_api::config::{LogFormat, ServerConfig};
use tabletop_api::router::{build_app_router, AppService};
use tabletop_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application with the production middleware stack, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> AppService {
    build_test_app_with_config(pool, &test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: &ServerConfig) -> AppService {
    build_app_router(AppState { pool }, config)
}

/// Drive one request through the service without a TCP listener.
pub async fn send(app: AppService, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: AppService, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn request_json(
    app: AppService,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn patch_json(app: AppService, uri: &str, body: serde_json::Value) -> Response<Body> {
    request_json(app, Method::PATCH, uri, body).await
}

pub async fn post_json(app: AppService, uri: &str, body: serde_json::Value) -> Response<Body> {
    request_json(app, Method::POST, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and the `message` of an error response.
pub async fn assert_error(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["message"], message);
}

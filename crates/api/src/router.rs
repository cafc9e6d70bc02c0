//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{middleware, Json, Router};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::error::TIMEOUT_MESSAGE;
use crate::response::ErrorBody;
use crate::routes;
use crate::state::AppState;

/// The fully assembled service: the router wrapped in trailing-slash
/// normalization, which has to run before routing.
pub type AppService = NormalizePath<Router>;

/// Build the full application with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout (408 with a `{message}` body)
/// 6. Panic recovery (catch panics, return 500)
///
/// Unmatched paths and unsupported methods on known paths both fall
/// through to [`routes::invalid_endpoint`].
pub fn build_app_router(state: AppState, config: &ServerConfig) -> AppService {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    let router = Router::new()
        .nest("/api", routes::api_routes())
        .fallback(routes::invalid_endpoint)
        .method_not_allowed_fallback(routes::invalid_endpoint)
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(middleware::map_response(describe_timeout))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// The timeout layer answers with an empty 408; give it the usual error body.
/// No handler returns 408 itself.
async fn describe_timeout(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }
    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ErrorBody {
            message: TIMEOUT_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// Build the CORS middleware layer from server configuration.
///
/// Panics at startup if any configured origin is invalid.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

//! Classification of handler failures into `{status, message}` responses.
//!
//! Classifiers run in a fixed order and the first match wins. The order
//! matters: storage type mismatches and not-null violations both come out
//! of the driver but map to different messages.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tabletop_core::error::CoreError;
use tabletop_db::DbError;

use crate::response::ErrorBody;

pub const MALFORMED_INPUT_MESSAGE: &str = "input is not valid";
pub const MISSING_FIELD_MESSAGE: &str = "input is missing";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
pub const INVALID_ENDPOINT_MESSAGE: &str = "invalid endpoint";
pub const TIMEOUT_MESSAGE: &str = "request timed out";

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain failure raised by a handler.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the repository layer.
    #[error(transparent)]
    Db(#[from] DbError),

    /// The request could not be extracted (bad path segment, unparseable or
    /// wrong-typed JSON body).
    #[error("Rejected request: {0}")]
    Rejected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

type Classifier = fn(&AppError) -> Option<(StatusCode, String)>;

/// The chain, in priority order. Anything left over is an internal error.
const CLASSIFIERS: [Classifier; 3] = [malformed_input, missing_field, domain];

fn malformed_input(err: &AppError) -> Option<(StatusCode, String)> {
    matches!(
        err,
        AppError::Rejected(_) | AppError::Db(DbError::MalformedInput(_))
    )
    .then(|| (StatusCode::BAD_REQUEST, MALFORMED_INPUT_MESSAGE.to_string()))
}

fn missing_field(err: &AppError) -> Option<(StatusCode, String)> {
    matches!(err, AppError::Db(DbError::MissingField(_)))
        .then(|| (StatusCode::BAD_REQUEST, MISSING_FIELD_MESSAGE.to_string()))
}

fn domain(err: &AppError) -> Option<(StatusCode, String)> {
    match err {
        AppError::Core(core @ CoreError::NotFound { .. }) => {
            Some((StatusCode::NOT_FOUND, core.to_string()))
        }
        _ => None,
    }
}

impl AppError {
    /// Run the classifier chain. Unclassified errors are logged here, since
    /// their cause never reaches the client.
    pub fn classify(&self) -> (StatusCode, String) {
        CLASSIFIERS
            .iter()
            .find_map(|classifier| classifier(self))
            .unwrap_or_else(|| {
                tracing::error!(error = ?self, "Unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();
        if status.is_client_error() {
            tracing::debug!(%status, error = %self, "Request failed");
        }
        (status, Json(ErrorBody { message })).into_response()
    }
}

//! Extractors whose rejections flow through [`AppError`] so that a bad path
//! segment or request body gets the same `{message}` body as every other
//! failure.

use axum::body::{Body, Bytes};
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// [`axum::extract::Path`] with rejections mapped to malformed input.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// JSON request body with rejections mapped to malformed input.
///
/// An empty body, or one sent without a JSON content type, is read as the
/// empty object: every field takes its default and the write then fails on
/// whatever the database requires. Bodies that are JSON but do not parse or
/// do not fit `T` are still rejected.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected(rejection.body_text()))?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let mut req = Request::new(Body::from(bytes));
        *req.headers_mut() = headers;
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self(T::default())),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

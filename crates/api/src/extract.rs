//! Request extractors for the movie endpoints.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use cinelog_core::types::DbId;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Movie id taken from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a movie, so it is rejected
/// as "not found" rather than as a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct MovieId(pub DbId);

impl<S: Send + Sync> FromRequestParts<S> for MovieId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::UnknownResource("Movie"))?;

        raw.parse()
            .map(MovieId)
            .map_err(|_| AppError::UnknownResource("Movie"))
    }
}

/// Untyped movie payload from a JSON request body.
///
/// Never rejects: an empty body, invalid JSON, or a non-object document all
/// yield an empty map, which the validator then reports field by field.
#[derive(Debug, Clone, Default)]
pub struct MoviePayload(pub Map<String, Value>);

impl<S: Send + Sync> FromRequest<S> for MoviePayload {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.unwrap_or_default();

        let payload = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Ok(MoviePayload(payload))
    }
}

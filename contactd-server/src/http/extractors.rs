//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON object body extractor whose rejection is an [`ApiError`].
///
/// The body is decoded as JSON whatever `Content-Type` says. Anything that
/// is not a JSON object of the expected shape is a 400.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::Body {
                reason: rejection.body_text(),
            })?;

        Ok(Self(decode_object(&bytes)?))
    }
}

/// Decode `bytes` as a JSON object into `T`.
///
/// Derived struct impls also accept sequences, so the object check runs
/// before `T` sees the value.
pub fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ValidationError::Syntax {
        reason: e.to_string(),
    })?;

    if !value.is_object() {
        return Err(ValidationError::Shape {
            reason: "expected a JSON object".to_string(),
        });
    }

    T::deserialize(value).map_err(|e| ValidationError::Shape {
        reason: e.to_string(),
    })
}

//! Request extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;
use tutor_core::{Error, ValidationErrorCode};
use validator::Validate;

use crate::response::ApiError;

/// JSON body that is parsed and then checked with its `validator` rules.
///
/// Parse failures map to `VALID_001`, rule violations to `VALID_002`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        value.validate().map_err(Error::from)?;
        Ok(ValidatedJson(value))
    }
}

/// JSON body without field rules.
///
/// Accepts any content type so the games can post plain `fetch` bodies.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        serde_json::from_slice(&body).map(JsonBody).map_err(|e| {
            debug!(payload_size = body.len(), "Rejected request body: {}", e);
            Error::validation_code(ValidationErrorCode::InvalidFormat, e.to_string()).into()
        })
    }
}

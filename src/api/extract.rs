//! Request Extractors
//!
//! JSON body extractor whose rejections use the API failure envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AqiError;

/// Drop-in replacement for `Json<T>` in request position.
///
/// Malformed or mistyped bodies become [`AqiError::Validation`], so clients
/// get `{"success": false, "message": ...}` instead of axum's plain text.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AqiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for AqiError {
    fn from(rejection: JsonRejection) -> Self {
        AqiError::Validation(rejection.body_text())
    }
}

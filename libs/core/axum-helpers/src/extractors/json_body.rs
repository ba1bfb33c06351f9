//! JSON body extractor with structured rejections.

use crate::errors::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] on the request side.
///
/// Syntax errors, missing content type and type mismatches are reported
/// through [`AppError::JsonExtractorRejection`], keeping the status axum picks
/// but using the shared error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AppJson;
///
/// async fn create(AppJson(payload): AppJson<serde_json::Value>) -> String {
///     payload.to_string()
/// }
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(data))
    }
}

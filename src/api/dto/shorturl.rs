//! DTOs for the short url endpoints.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;
use crate::error::AppError;

/// Request to shorten a URL.
///
/// Accepted either as `application/json` or as an
/// `application/x-www-form-urlencoded` form with a `url` field.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortUrlRequest {
    #[validate(required, url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

impl<S> FromRequest<S> for ShortUrlRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<Self>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    tracing::debug!(%rejection, "Unreadable JSON body");
                    AppError::InvalidUrl
                })?;
            Ok(payload)
        } else {
            let Form(payload) = Form::<Self>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    tracing::debug!(%rejection, "Unreadable form body");
                    AppError::InvalidUrl
                })?;
            Ok(payload)
        }
    }
}

/// A created or existing mapping.
///
/// # Example
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlMapping> for ShortUrlResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_url,
        }
    }
}

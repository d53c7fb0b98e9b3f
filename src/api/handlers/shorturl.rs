//! Handler for the short url creation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorturl::{ShortUrlRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, or returns the mapping it already has.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form (`url=https://www.freecodecamp.org`) or JSON:
///
/// ```json
/// { "url": "https://www.freecodecamp.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - `{"error": "invalid url"}` for missing, malformed or non-resolving URLs
/// - 503 if a short url could not be assigned under contention
/// - 500 on store failures
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    payload: ShortUrlRequest,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let Some(url) = payload.url else {
        return Err(AppError::InvalidUrl);
    };

    let mapping = state.shortener.create(&url).await?;

    Ok(Json(mapping.into()))
}

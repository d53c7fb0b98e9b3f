//! Handler for short url redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short url to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{shorturl}`
///
/// # Response
///
/// - **302 Found** with `Location` set to the original URL
/// - `{"error": "The short url does not exist!"}` if the id is unknown or
///   not an integer
pub async fn redirect_handler(
    Path(shorturl): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Ok(short_url) = shorturl.trim().parse::<i64>() else {
        return Err(AppError::NotFound);
    };

    let original_url = state.shortener.resolve(short_url).await?;

    let location = location_header(&original_url).map_err(|e| {
        error!(short_url, error = %e, "Stored URL is not a valid Location header");
        AppError::Internal
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs are sent exactly as stored. Anything else goes out in its
/// serialized form: path, query and fragment percent-encoded, domain in
/// punycode.
fn location_header(original_url: &str) -> anyhow::Result<HeaderValue> {
    if original_url.is_ascii() {
        return Ok(HeaderValue::from_str(original_url)?);
    }

    let url = Url::parse(original_url)?;
    Ok(HeaderValue::from_str(url.as_str())?)
}

//! API route configuration.

use crate::api::handlers::{create_short_url_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short url routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`             - Shorten a URL
/// - `GET  /shorturl/{shorturl}`  - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(create_short_url_handler))
        .route("/shorturl/{shorturl}", get(redirect_handler))
}

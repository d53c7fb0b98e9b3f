//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header, so browser front ends hosted
/// elsewhere can call the API.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}

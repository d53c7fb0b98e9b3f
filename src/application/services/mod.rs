//! Business logic services for the application layer.

pub mod shortener_service;
pub mod url_validator;

pub use shortener_service::{ResolveError, ShortenError, ShortenerService};
pub use url_validator::UrlValidator;

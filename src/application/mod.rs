//! Application layer services implementing business logic.
//!
//! Services consume repository and resolver traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Structural and DNS validation of candidate URLs
//! - [`services::shortener_service::ShortenerService`] - Short url creation and resolution

pub mod services;

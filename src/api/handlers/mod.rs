//! HTTP request handlers for API endpoints.

pub mod redirect;
pub mod shorturl;

pub use redirect::redirect_handler;
pub use shorturl::create_short_url_handler;

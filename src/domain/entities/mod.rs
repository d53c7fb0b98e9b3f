//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`], which is a plain data
//! structure without behaviour beyond id sequencing.

pub mod url_mapping;

pub use url_mapping::UrlMapping;

//! Utility functions for URL parsing and database error handling.
//!
//! - [`url_parser`] - Structural validation of candidate URLs
//! - [`db_error`] - Classification of unique constraint violations

pub mod db_error;
pub mod url_parser;

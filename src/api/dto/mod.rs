//! Data Transfer Objects for API requests and responses.
//!
//! DTOs use Serde for JSON/form (de)serialization and validator for input
//! validation.

pub mod shorturl;

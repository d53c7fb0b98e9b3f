//! Url mapping entity: one original URL bound to its sequential short id.

use sqlx::FromRow;

/// A persisted association between an original URL and its short id.
///
/// Mappings are created once and never updated or deleted. The short id is
/// exposed externally (and stored) under the name `short_url`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_url: i64,
}

impl UrlMapping {
    /// Creates a new mapping instance.
    pub fn new(original_url: impl Into<String>, short_url: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }

    /// Returns the id that follows `current_max`, starting the sequence at 1.
    pub fn next_short_url(current_max: Option<i64>) -> i64 {
        current_max.unwrap_or(0) + 1
    }
}

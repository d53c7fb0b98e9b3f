/// Column of `url_mappings` named by a unique constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingField {
    ShortUrl,
    OriginalUrl,
}

/// Identifies which unique column an insert into `url_mappings` violated.
///
/// PostgreSQL reports the constraint name; SQLite only names the column in the
/// message (`UNIQUE constraint failed: url_mappings.short_url`).
pub fn unique_violation_field(e: &sqlx::Error) -> Option<MappingField> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some("url_mappings_short_url_key") => return Some(MappingField::ShortUrl),
        Some("url_mappings_original_url_key") => return Some(MappingField::OriginalUrl),
        _ => {}
    }

    let message = db_err.message();
    if message.contains("short_url") {
        Some(MappingField::ShortUrl)
    } else if message.contains("original_url") {
        Some(MappingField::OriginalUrl)
    } else {
        None
    }
}

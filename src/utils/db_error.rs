//! Classification of database uniqueness violations.

/// Which uniqueness constraint rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueViolation {
    /// `ux_url_mappings_short_code` - a short code collision.
    ShortCode,
    /// `ux_url_mappings_url_owner` - the `(original_url, created_by)` dedup
    /// pair already exists.
    UrlOwner,
}

/// Maps a sqlx error to the violated constraint, if it is a unique violation
/// on one of the `url_mappings` constraints.
pub fn classify_unique_violation(e: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some("ux_url_mappings_short_code") => Some(UniqueViolation::ShortCode),
        Some("ux_url_mappings_url_owner") => Some(UniqueViolation::UrlOwner),
        _ => None,
    }
}

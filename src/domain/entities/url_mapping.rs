//! URL mapping entity, the persisted shortening record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted mapping between a short code and an original URL.
///
/// Mappings are created exactly once and never mutated. The `created_by`
/// field carries the owner identity; `None` means the mapping was created
/// anonymously. The same URL submitted by different identities produces
/// distinct mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_by: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_by,
            created_at,
        }
    }

    /// Returns true if the mapping was created without an owner identity.
    pub fn is_anonymous(&self) -> bool {
        self.created_by.is_none()
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub original_url: String,
    pub created_by: Option<String>,
}

//! Creation event published to downstream consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// Notification payload announcing a newly created mapping.
///
/// Published fire-and-forget on the `url-created` topic after the durable
/// insert succeeds. Deduplicated submissions do not produce an event, and a
/// publish failure never rolls back the persisted mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlCreatedEvent {
    pub short_code: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&UrlMapping> for UrlCreatedEvent {
    fn from(mapping: &UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code.clone(),
            created_by: mapping.created_by.clone(),
            created_at: mapping.created_at,
        }
    }
}

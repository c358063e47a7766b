//! No-op publisher for testing or disabled notifications.

use async_trait::async_trait;
use tracing::debug;

use super::publisher::{EventPublisher, PublishResult};
use crate::domain::events::UrlCreatedEvent;

/// A publisher that drops every event.
///
/// Used when no notification channel is configured. Creation still succeeds;
/// downstream consumers simply receive nothing.
pub struct NullPublisher;

impl NullPublisher {
    pub fn new() -> Self {
        debug!("Using NullPublisher (notifications disabled)");
        Self
    }
}

impl Default for NullPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for NullPublisher {
    async fn publish(&self, _event: &UrlCreatedEvent) -> PublishResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

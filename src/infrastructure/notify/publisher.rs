//! Notification publisher trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::events::UrlCreatedEvent;

/// Topic on which creation events are announced.
pub const URL_CREATED_TOPIC: &str = "url-created";

/// Errors that can occur while publishing a notification.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publisher connection error: {0}")]
    Connection(String),
    #[error("publish failed: {0}")]
    Operation(String),
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Trait for announcing mapping creation to downstream consumers.
///
/// Publishing is fire-and-forget: the caller logs and swallows failures,
/// and a failed publish never rolls back the persisted mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::notify::RedisPublisher`] - Redis pub/sub channel
/// - [`crate::infrastructure::notify::NullPublisher`] - No-op implementation for disabled notifications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes a creation event on [`URL_CREATED_TOPIC`].
    async fn publish(&self, event: &UrlCreatedEvent) -> PublishResult<()>;

    /// Checks if the notification channel is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}

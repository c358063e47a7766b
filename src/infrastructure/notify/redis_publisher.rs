//! Redis pub/sub notification publisher.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use super::publisher::{EventPublisher, PublishError, PublishResult, URL_CREATED_TOPIC};
use crate::domain::events::UrlCreatedEvent;

/// Publishes creation events as JSON payloads on a Redis pub/sub channel.
pub struct RedisPublisher {
    client: ConnectionManager,
}

impl RedisPublisher {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> PublishResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| PublishError::Connection(format!("Failed to create Redis client: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| PublishError::Connection(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| PublishError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Notification channel enabled (Redis pub/sub)");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl EventPublisher for RedisPublisher {
    async fn publish(&self, event: &UrlCreatedEvent) -> PublishResult<()> {
        let payload = serde_json::to_string(event)
            .map_err(|e| PublishError::Operation(format!("Failed to serialize event: {e}")))?;

        let mut conn = self.client.clone();
        conn.publish::<_, _, ()>(URL_CREATED_TOPIC, payload)
            .await
            .map_err(|e| PublishError::Operation(format!("Redis PUBLISH failed: {e}")))?;

        debug!("Published url-created event for {}", event.short_code);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

//! Redis-backed cache implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::UrlMapping;

/// Redis cache for fast mapping lookups by short code.
///
/// Uses `ConnectionManager` for connection reuse. Values are the JSON
/// serialization of [`UrlMapping`], stored without expiry.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "url:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn put(&self, short_code: &str, mapping: &UrlMapping) -> CacheResult<()> {
        let key = self.build_key(short_code);
        let payload = serde_json::to_string(mapping)
            .map_err(|e| CacheError::Operation(format!("Failed to serialize mapping: {e}")))?;

        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(&key, payload)
            .await
            .map_err(|e| CacheError::Operation(format!("Redis SET failed for {short_code}: {e}")))?;

        debug!("Cache SET: {}", short_code);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

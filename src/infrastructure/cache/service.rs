//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::UrlMapping;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),
    #[error("cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for the read-optimized mapping cache.
///
/// The cache holds a derived copy of durable state keyed by short code; the
/// store remains the source of truth. Write failures are reported to the
/// caller, which is expected to log and swallow them - a broken cache must
/// never fail a shorten request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Stores a mapping keyed by its short code.
    ///
    /// Entries carry no TTL: mappings are immutable and never deleted, so a
    /// cached copy can only go stale by eviction.
    async fn put(&self, short_code: &str, mapping: &UrlMapping) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}

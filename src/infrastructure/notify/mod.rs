//! Asynchronous creation notifications.
//!
//! Provides an [`EventPublisher`] trait with two implementations:
//! - [`RedisPublisher`] - Redis pub/sub channel
//! - [`NullPublisher`] - No-op implementation for testing/disabled notifications

mod null_publisher;
mod publisher;
mod redis_publisher;

pub use null_publisher::NullPublisher;
pub use publisher::{EventPublisher, PublishError, PublishResult, URL_CREATED_TOPIC};
pub use redis_publisher::RedisPublisher;

#[cfg(test)]
pub use publisher::MockEventPublisher;

//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache and notification channel setup, and
//! the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{JwtDecoder, ShortenerService};
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::notify::{EventPublisher, NullPublisher, RedisPublisher};
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::telemetry::MetricsTelemetry;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Redis cache and pub/sub notification channel (or no-op fallbacks)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let publisher: Arc<dyn EventPublisher> = if let Some(redis_url) = &config.redis_url {
        match RedisPublisher::connect(redis_url).await {
            Ok(redis) => Arc::new(redis),
            Err(e) => {
                tracing::warn!(
                    "Failed to connect notification channel: {}. Using NullPublisher.",
                    e
                );
                Arc::new(NullPublisher::new())
            }
        }
    } else {
        tracing::info!("Notifications disabled (NullPublisher)");
        Arc::new(NullPublisher::new())
    };

    let repository: Arc<dyn MappingRepository> = Arc::new(PgMappingRepository::new(Arc::new(pool)));

    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        cache.clone(),
        publisher.clone(),
        Arc::new(JwtDecoder::new(&config.jwt_secret)),
        Arc::new(MetricsTelemetry::new()),
        config.base_url.clone(),
    ));

    let state = AppState::new(shortener, repository, cache, publisher);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

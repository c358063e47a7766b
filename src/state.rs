//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::notify::EventPublisher;

/// Application state shared across handlers.
///
/// The repository, cache, and publisher handles are also held directly so
/// the health endpoint can probe them without going through the service.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub repository: Arc<dyn MappingRepository>,
    pub cache: Arc<dyn CacheService>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        repository: Arc<dyn MappingRepository>,
        cache: Arc<dyn CacheService>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            shortener,
            repository,
            cache,
            publisher,
        }
    }
}

//! URL shortening orchestration.

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use tracing::warn;

use crate::application::services::identity_service::CredentialDecoder;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::events::UrlCreatedEvent;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::notify::EventPublisher;
use crate::telemetry::Telemetry;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Attempts at generating a non-colliding short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

/// How a mapping was obtained by the creation path.
enum Creation {
    /// Newly persisted by this call; cache, notify, and the created-counter
    /// apply.
    Fresh(UrlMapping),
    /// A concurrent identical submission won the insert race; its mapping is
    /// returned without further side effects.
    Existing(UrlMapping),
}

/// Service for shortening URLs.
///
/// Composes the collaborators in a fixed sequence: URL validation, identity
/// resolution, dedup lookup, then - only on the creation path - code
/// generation, durable insert, best-effort cache populate, and best-effort
/// creation notification. Telemetry is recorded at every branch.
///
/// No locks are held across the sequence; correctness under concurrent
/// duplicate submissions relies on the store's uniqueness constraints.
pub struct ShortenerService {
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
    publisher: Arc<dyn EventPublisher>,
    decoder: Arc<dyn CredentialDecoder>,
    telemetry: Arc<dyn Telemetry>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        cache: Arc<dyn CacheService>,
        publisher: Arc<dyn EventPublisher>,
        decoder: Arc<dyn CredentialDecoder>,
        telemetry: Arc<dyn Telemetry>,
        base_url: String,
    ) -> Self {
        Self {
            repository,
            cache,
            publisher,
            decoder,
            telemetry,
            base_url,
        }
    }

    /// Shortens a URL for the identity carried by `credential`.
    ///
    /// # Deduplication
    ///
    /// If a mapping for the exact `(url, identity)` pair already exists, the
    /// existing mapping is returned without touching the cache or emitting a
    /// notification - no new state was created.
    ///
    /// # Side effects on creation
    ///
    /// Cache populate and event publish are best-effort: their failures are
    /// logged and counted but never fail the call once the durable insert
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a rejected URL,
    /// [`AppError::Unauthorized`] for an undecodable credential, and
    /// [`AppError::Internal`] for store failures or exhausted code
    /// generation attempts.
    pub async fn shorten(
        &self,
        url: &str,
        credential: Option<&str>,
    ) -> Result<UrlMapping, AppError> {
        let started = Instant::now();

        if let Err(reason) = validate_url(url) {
            self.telemetry.validation_failed();
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "reason": reason }),
            ));
        }

        let owner = self.resolve_identity(credential)?;

        if let Some(existing) = self.repository.find_by_url_and_owner(url, &owner).await? {
            self.telemetry.request_latency(started.elapsed());
            return Ok(existing);
        }

        let mapping = match self.create_mapping(url, owner).await? {
            Creation::Fresh(mapping) => {
                if let Err(e) = self.cache.put(&mapping.short_code, &mapping).await {
                    warn!("Cache write failed for {}: {}", mapping.short_code, e);
                    self.telemetry.cache_write_failed();
                }

                let event = UrlCreatedEvent::from(&mapping);
                if let Err(e) = self.publisher.publish(&event).await {
                    warn!(
                        "Failed to publish creation event for {}: {}",
                        mapping.short_code, e
                    );
                    self.telemetry.publish_failed();
                }

                self.telemetry.url_created(&mapping.created_by);
                mapping
            }
            Creation::Existing(mapping) => mapping,
        };

        self.telemetry.request_latency(started.elapsed());
        Ok(mapping)
    }

    /// Constructs the full short reference for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }

    /// Resolves an optional credential to an owner identity.
    ///
    /// Absent or blank credentials mean anonymous; that is not an error.
    fn resolve_identity(&self, credential: Option<&str>) -> Result<Option<String>, AppError> {
        match credential {
            Some(token) if !token.trim().is_empty() => self.decoder.decode(token).map(Some),
            _ => Ok(None),
        }
    }

    /// Inserts a new mapping, regenerating the code on collision.
    ///
    /// A `UrlTaken` outcome means a concurrent identical submission won the
    /// race after our dedup lookup missed; the winner's mapping is fetched
    /// and returned instead of erroring.
    async fn create_mapping(
        &self,
        url: &str,
        owner: Option<String>,
    ) -> Result<Creation, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let candidate = NewUrlMapping {
                short_code: generate_code(),
                original_url: url.to_string(),
                created_by: owner.clone(),
            };

            match self.repository.insert(candidate).await? {
                InsertOutcome::Created(mapping) => return Ok(Creation::Fresh(mapping)),
                InsertOutcome::CodeTaken => continue,
                InsertOutcome::UrlTaken => {
                    return self
                        .repository
                        .find_by_url_and_owner(url, &owner)
                        .await?
                        .map(Creation::Existing)
                        .ok_or_else(|| {
                            AppError::internal(
                                "Mapping missing after duplicate-key insert",
                                json!({ "url": url }),
                            )
                        });
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use curly::application::services::{JwtDecoder, ShortenerService};
use curly::domain::entities::{NewUrlMapping, UrlMapping};
use curly::domain::events::UrlCreatedEvent;
use curly::domain::repositories::{InsertOutcome, MappingRepository};
use curly::error::AppError;
use curly::infrastructure::cache::{CacheError, CacheResult, CacheService};
use curly::infrastructure::notify::{EventPublisher, PublishError, PublishResult};
use curly::state::AppState;
use curly::telemetry::Telemetry;

pub const JWT_SECRET: &str = "test-jwt-secret";
pub const BASE_URL: &str = "http://cur.ly";

/// In-memory stand-in for the durable store, enforcing both uniqueness
/// constraints the real schema carries.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    rows: Mutex<Vec<UrlMapping>>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn mappings(&self) -> Vec<UrlMapping> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_url_and_owner(
        &self,
        original_url: &str,
        created_by: &Option<String>,
    ) -> Result<Option<UrlMapping>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|m| m.original_url == original_url && m.created_by == *created_by)
            .cloned())
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<InsertOutcome, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|m| m.short_code == new_mapping.short_code) {
            return Ok(InsertOutcome::CodeTaken);
        }
        if rows
            .iter()
            .any(|m| m.original_url == new_mapping.original_url && m.created_by == new_mapping.created_by)
        {
            return Ok(InsertOutcome::UrlTaken);
        }

        let mapping = UrlMapping::new(
            rows.len() as i64 + 1,
            new_mapping.short_code,
            new_mapping.original_url,
            new_mapping.created_by,
            Utc::now(),
        );
        rows.push(mapping.clone());
        Ok(InsertOutcome::Created(mapping))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache double that records every write.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, UrlMapping>>,
    puts: AtomicUsize,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn get(&self, short_code: &str) -> Option<UrlMapping> {
        self.entries.lock().unwrap().get(short_code).cloned()
    }
}

#[async_trait]
impl CacheService for RecordingCache {
    async fn put(&self, short_code: &str, mapping: &UrlMapping) -> CacheResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(short_code.to_string(), mapping.clone());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache double whose writes always fail.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn put(&self, _short_code: &str, _mapping: &UrlMapping) -> CacheResult<()> {
        Err(CacheError::Operation("cache is down".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Publisher double that records every event.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<UrlCreatedEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<UrlCreatedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &UrlCreatedEvent) -> PublishResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Publisher double whose publishes always fail.
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: &UrlCreatedEvent) -> PublishResult<()> {
        Err(PublishError::Operation("channel is down".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Telemetry double counting every recorded measurement.
#[derive(Default)]
pub struct RecordingTelemetry {
    created_users: Mutex<Vec<String>>,
    validation_failures: AtomicUsize,
    cache_write_failures: AtomicUsize,
    publish_failures: AtomicUsize,
    latencies: AtomicUsize,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_users(&self) -> Vec<String> {
        self.created_users.lock().unwrap().clone()
    }

    pub fn validation_failures(&self) -> usize {
        self.validation_failures.load(Ordering::SeqCst)
    }

    pub fn cache_write_failures(&self) -> usize {
        self.cache_write_failures.load(Ordering::SeqCst)
    }

    pub fn publish_failures(&self) -> usize {
        self.publish_failures.load(Ordering::SeqCst)
    }

    pub fn latency_count(&self) -> usize {
        self.latencies.load(Ordering::SeqCst)
    }
}

impl Telemetry for RecordingTelemetry {
    fn url_created(&self, created_by: &Option<String>) {
        let user = created_by.as_deref().unwrap_or("anonymous").to_string();
        self.created_users.lock().unwrap().push(user);
    }

    fn validation_failed(&self) {
        self.validation_failures.fetch_add(1, Ordering::SeqCst);
    }

    fn cache_write_failed(&self) {
        self.cache_write_failures.fetch_add(1, Ordering::SeqCst);
    }

    fn publish_failed(&self) {
        self.publish_failures.fetch_add(1, Ordering::SeqCst);
    }

    fn request_latency(&self, _elapsed: Duration) {
        self.latencies.fetch_add(1, Ordering::SeqCst);
    }
}

/// Everything a test needs to drive the service and observe side effects.
pub struct TestApp {
    pub state: AppState,
    pub repository: Arc<InMemoryMappingRepository>,
    pub cache: Arc<RecordingCache>,
    pub publisher: Arc<RecordingPublisher>,
    pub telemetry: Arc<RecordingTelemetry>,
}

pub fn create_test_app() -> TestApp {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let cache = Arc::new(RecordingCache::new());
    let publisher = Arc::new(RecordingPublisher::new());
    let telemetry = Arc::new(RecordingTelemetry::new());

    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        cache.clone(),
        publisher.clone(),
        Arc::new(JwtDecoder::new(JWT_SECRET)),
        telemetry.clone(),
        BASE_URL.to_string(),
    ));

    let state = AppState::new(
        shortener,
        repository.clone(),
        cache.clone(),
        publisher.clone(),
    );

    TestApp {
        state,
        repository,
        cache,
        publisher,
        telemetry,
    }
}

/// Builds a state whose cache and notification channel always fail.
pub fn create_degraded_app() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let cache = Arc::new(FailingCache);
    let publisher = Arc::new(FailingPublisher);

    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        cache.clone(),
        publisher.clone(),
        Arc::new(JwtDecoder::new(JWT_SECRET)),
        Arc::new(RecordingTelemetry::new()),
        BASE_URL.to_string(),
    ));

    let state = AppState::new(shortener, repository.clone(), cache, publisher);

    (state, repository)
}

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    exp: usize,
}

/// Mints a valid HS256 token for `username`, signed with [`JWT_SECRET`].
pub fn mint_token(username: &str) -> String {
    let claims = TestClaims {
        sub: username.to_string(),
        exp: (Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

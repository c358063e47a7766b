//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating the durable store, cache,
//! notification channel, credential decoding, and telemetry behind a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - URL shortening orchestration
//! - [`services::identity_service::JwtDecoder`] - Credential decoding

pub mod services;

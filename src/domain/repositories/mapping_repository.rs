//! Repository trait for the durable mapping store.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an insert attempt against the durable store.
///
/// Uniqueness violations are part of the normal control flow (collision
/// retry and concurrent-duplicate reconciliation), so they are modeled as
/// tagged outcomes rather than errors. Only genuine store failures surface
/// as [`AppError`].
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The mapping was persisted; carries the stored row including the
    /// assigned `id` and `created_at`.
    Created(UrlMapping),
    /// The generated short code is already taken by another mapping.
    CodeTaken,
    /// Another mapping already exists for the same `(original_url, created_by)`
    /// pair - a concurrent submission won the race.
    UrlTaken,
}

/// Repository interface for the system of record.
///
/// Lookups match the dedup pair exactly: anonymous (`created_by = None`)
/// only ever matches other anonymous submissions of the same URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping for an exact `(original_url, created_by)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_url_and_owner(
        &self,
        original_url: &str,
        created_by: &Option<String>,
    ) -> Result<Option<UrlMapping>, AppError>;

    /// Attempts to insert a new mapping.
    ///
    /// Both uniqueness constraints are enforced by the store; which one
    /// rejected the insert is reported through [`InsertOutcome`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors other than
    /// uniqueness violations.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<InsertOutcome, AppError>;

    /// Checks if the store is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}

//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::db_error::{UniqueViolation, classify_unique_violation};

/// PostgreSQL repository for the `url_mappings` table.
///
/// Uniqueness of `short_code` and of the `(original_url, created_by)` dedup
/// pair is enforced by database constraints; see the migrations. `id` and
/// `created_at` are assigned by the database on insert.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(e: sqlx::Error) -> AppError {
    error!("Database error: {}", e);
    AppError::internal("Database error", json!({}))
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_url_and_owner(
        &self,
        original_url: &str,
        created_by: &Option<String>,
    ) -> Result<Option<UrlMapping>, AppError> {
        // IS NOT DISTINCT FROM makes NULL match NULL, so anonymous submissions
        // deduplicate only against other anonymous submissions.
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_code, original_url, created_by, created_at
            FROM url_mappings
            WHERE original_url = $1 AND created_by IS NOT DISTINCT FROM $2
            "#,
        )
        .bind(original_url)
        .bind(created_by.as_deref())
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (short_code, original_url, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, short_code, original_url, created_by, created_at
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.created_by)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(mapping) => Ok(InsertOutcome::Created(mapping)),
            Err(e) => match classify_unique_violation(&e) {
                Some(UniqueViolation::ShortCode) => Ok(InsertOutcome::CodeTaken),
                Some(UniqueViolation::UrlOwner) => Ok(InsertOutcome::UrlTaken),
                None => Err(map_sqlx_error(e)),
            },
        }
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}

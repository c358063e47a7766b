//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using sqlx with
//! runtime-bound queries.

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;

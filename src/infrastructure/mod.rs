//! Infrastructure layer for external collaborators.
//!
//! Implements the contracts defined by the domain layer against concrete
//! backends.
//!
//! # Modules
//!
//! - [`cache`] - Write-through mapping cache (Redis and no-op implementations)
//! - [`notify`] - Creation event publishing (Redis pub/sub and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod notify;
pub mod persistence;

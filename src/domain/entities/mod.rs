//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use a separate `New*` struct so store-assigned fields (`id`,
//! `created_at`) never appear half-initialized.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};

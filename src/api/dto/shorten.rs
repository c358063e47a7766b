//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute http/https).
    pub url: String,
}

/// Response carrying the short reference.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// The generated (or deduplicated) short code.
    pub code: String,
    /// The full short reference, base address plus code.
    pub short_url: String,
}

//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header::AUTHORIZATION},
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short reference for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Authentication
///
/// Optional. An `Authorization: Bearer <jwt>` header attributes the mapping
/// to the token's username; without it the mapping is anonymous. A present
/// but undecodable token is rejected with 401 - it is never downgraded to
/// anonymous.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "aB3xY9", "short_url": "http://cur.ly/aB3xY9" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request - the URL is not an absolute http/https URL
/// - 401 Unauthorized - the supplied credential failed to decode
/// - 500 Internal Server Error - durable store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let credential = bearer_token(&headers);

    let mapping = state
        .shortener
        .shorten(&payload.url, credential.as_deref())
        .await?;

    let short_url = state.shortener.short_url(&mapping.short_code);

    Ok(Json(ShortenResponse {
        code: mapping.short_code,
        short_url,
    }))
}

/// Extracts a Bearer token from the Authorization header, if present.
///
/// Other authorization schemes are ignored rather than rejected; the
/// shortener itself only understands bearer credentials.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

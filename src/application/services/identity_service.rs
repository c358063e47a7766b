//! Credential decoding for owner identity resolution.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;

/// Decodes an opaque credential string into a username.
///
/// The shortener depends only on this capability, not on any specific token
/// format. Decoding is pure: no network calls, no storage access.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialDecoder: Send + Sync {
    /// Decodes a credential into the owner's username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credential is malformed,
    /// expired, or carries a bad signature.
    fn decode(&self, credential: &str) -> Result<String, AppError>;
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// HS256 JWT decoder extracting the `sub` claim as the username.
pub struct JwtDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl JwtDecoder {
    /// Creates a decoder verifying signatures against a shared secret.
    ///
    /// Expiry is validated; issuance happens elsewhere.
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

impl CredentialDecoder for JwtDecoder {
    fn decode(&self, credential: &str) -> Result<String, AppError> {
        let data = decode::<Claims>(credential, &self.key, &self.validation).map_err(|e| {
            AppError::unauthorized("Invalid credential", json!({ "reason": e.to_string() }))
        })?;

        Ok(data.claims.sub)
    }
}

//! Input URL validation policy.

use url::Url;

/// Validates that the input is an absolute `http` or `https` URL.
///
/// Loopback and other local hosts are accepted on purpose - internal and
/// development deployments shorten URLs pointing at private hosts. Dedup
/// matches the input string exactly, so no normalization is applied here.
pub fn validate_url(input: &str) -> Result<(), String> {
    let url = Url::parse(input).map_err(|e| format!("Invalid URL: {e}"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("Unsupported URL scheme: {other}")),
    }

    if url.host_str().is_none() {
        return Err("URL must have a host".to_string());
    }

    Ok(())
}

use crate::UrlError;
use url::Url;

/// Parses and validates a seed URL
///
/// Only HTTP and HTTPS URLs can be crawled; anything else is rejected before
/// any network work happens.
///
/// # Arguments
///
/// * `url_str` - The seed URL string from the CLI
///
/// # Returns
///
/// * `Ok(Url)` - Parsed seed URL
/// * `Err(UrlError)` - The URL is malformed or uses an unsupported scheme
pub fn parse_seed_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Normalizes a URL into the identity string used by the visited set
///
/// # Normalization Steps
///
/// 1. Lowercase the host
/// 2. Drop the fragment (same resource, different anchor)
///
/// Scheme-default ports are already dropped by `Url::parse`. Path and query
/// are kept verbatim: two URLs that differ there may serve different content
/// and must both be fetched.
///
/// # Arguments
///
/// * `url` - The resolved absolute URL
///
/// # Returns
///
/// * `Ok(String)` - Normalized identity string
/// * `Err(UrlError)` - The URL has no host or the host cannot be rewritten
pub fn normalize_url(url: &Url) -> Result<String, UrlError> {
    let mut normalized = url.clone();

    match normalized.host_str() {
        Some(host) => {
            let lowercase = host.to_lowercase();
            if lowercase != host {
                normalized
                    .set_host(Some(&lowercase))
                    .map_err(|e| UrlError::Malformed(format!("Failed to set host: {}", e)))?;
            }
        }
        None => return Err(UrlError::MissingHost),
    }

    normalized.set_fragment(None);

    Ok(normalized.into())
}

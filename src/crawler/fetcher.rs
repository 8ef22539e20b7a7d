//! HTTP fetcher implementation
//!
//! This module handles page-level HTTP requests for the crawler, including:
//! - Building the shared HTTP client with a proper user agent string
//! - GET requests to fetch page content
//! - Error classification (HTTP status vs. transport failures)
//!
//! One client is built per top-level crawl and reused for every GET and HEAD,
//! so connection setup is amortized across the whole run.

use crate::config::Config;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Result of a page fetch
///
/// Failures are data, not errors: the coordinator treats both variants as a
/// recoverable per-URL failure that terminates only the affected branch.
#[derive(Debug)]
pub enum PageFetch {
    /// Successfully fetched the page body
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Transport failure (DNS, connection refused, timeout, TLS)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for every request in one crawl
///
/// The user agent is formatted as `CrawlerName/Version (+ContactURL; ContactEmail)`.
/// TLS certificate verification stays on unless `accept-invalid-certs` was
/// explicitly set in the configuration.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let ua = &config.user_agent;
    let user_agent = format!(
        "{}/{} (+{}; {})",
        ua.crawler_name, ua.crawler_version, ua.contact_url, ua.contact_email
    );

    let mut builder = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true);

    if config.crawler.accept_invalid_certs {
        tracing::warn!("TLS certificate verification is disabled for this crawl");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build()
}

/// Fetches a page body with full error classification
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// A [`PageFetch`] indicating success or the type of failure; this function
/// never returns an error.
pub async fn fetch_page(client: &Client, url: &Url) -> PageFetch {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return PageFetch::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => PageFetch::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => PageFetch::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            // Classify error for log quality
            if e.is_timeout() {
                PageFetch::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                PageFetch::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                PageFetch::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

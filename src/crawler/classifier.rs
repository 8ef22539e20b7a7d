//! Link classification
//!
//! Every candidate link is classified exactly once per page visit:
//!
//! - a resolved URL whose path ends in `.pdf` or `.epub` is a document,
//!   decided without any network traffic;
//! - anything else is probed with a HEAD request and counts as a page iff
//!   the server says it serves HTML;
//! - everything else is ignored.
//!
//! The HEAD round-trip per candidate is deliberate: content negotiation is
//! what decides whether a link is worth recursing into, not its spelling.
//! Classification results are not cached across visits.

use crate::crawler::parser::CandidateLink;
use crate::document::DocumentKind;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

/// What a candidate link turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A downloadable document, identified by extension
    Document(DocumentKind),

    /// An HTML page eligible for recursive link extraction
    Page,

    /// Neither a document nor a page
    Ignored,
}

/// Identifies a document link by its resolved URL's extension
///
/// The match is case-sensitive on the URL path (`.PDF` does not qualify),
/// and the query string is not considered.
pub fn document_kind(url: &Url) -> Option<DocumentKind> {
    let path = url.path();
    if path.ends_with(".pdf") {
        Some(DocumentKind::Pdf)
    } else if path.ends_with(".epub") {
        Some(DocumentKind::Epub)
    } else {
        None
    }
}

/// Checks whether a candidate URL serves an HTML page
///
/// Issues a HEAD request and inspects the `Content-Type` header,
/// case-insensitively. Returns true iff the value begins with `text/html`.
///
/// This function never fails: any transport error or missing header yields
/// `false` (fail-closed), so classification never terminates a crawl branch.
pub async fn is_page(client: &Client, url: &Url) -> bool {
    let response = match client.head(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("HEAD failed for {}: {}", url, e);
            return false;
        }
    };

    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().starts_with("text/html"))
        .unwrap_or(false)
}

/// Classifies a candidate link
///
/// Extension wins without network traffic; everything else costs one HEAD.
pub async fn classify(client: &Client, link: &CandidateLink) -> LinkKind {
    if let Some(kind) = document_kind(&link.resolved) {
        return LinkKind::Document(kind);
    }

    if is_page(client, &link.resolved).await {
        LinkKind::Page
    } else {
        LinkKind::Ignored
    }
}

//! HTML parser for extracting candidate links
//!
//! This module parses a fetched page body and extracts every hyperlink as a
//! [`CandidateLink`], resolving relative hrefs against the page URL. The
//! candidates keep their page order: downloads and traversal both happen in
//! the order links appear in the document.

use scraper::{Html, Selector};
use url::Url;

/// One hyperlink discovered on a page
///
/// Never mutated after creation; scoped to a single page visit.
#[derive(Debug, Clone)]
pub struct CandidateLink {
    /// The href attribute exactly as written in the document
    pub raw_href: String,

    /// The href resolved to an absolute URL against the page URL
    pub resolved: Url,
}

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// All candidate links found on the page, in document order
    pub links: Vec<CandidateLink>,
}

/// Parses HTML content and extracts candidate links
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` anywhere in the document.
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only links (same-page anchors)
/// - Hrefs that fail to resolve, or resolve to a non-HTTP(S) scheme
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The page URL relative hrefs are resolved against
///
/// # Returns
///
/// The parsed page; an unparseable document simply yields no links.
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_link(href, base_url) {
                    links.push(CandidateLink {
                        raw_href: href.to_string(),
                        resolved,
                    });
                }
            }
        }
    }

    ParsedPage { links }
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(resolved) => {
            // Only accept HTTP and HTTPS URLs
            if resolved.scheme() == "http" || resolved.scheme() == "https" {
                Some(resolved)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

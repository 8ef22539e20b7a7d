//! Crawler module for bounded document harvesting
//!
//! This module contains the core crawling logic, including:
//! - HTTP client construction and page fetching
//! - HTML parsing and link extraction
//! - Link classification (document vs. page vs. ignored)
//! - Document downloading under the global quota
//! - Depth-first crawl coordination

mod classifier;
mod coordinator;
mod downloader;
mod fetcher;
mod parser;

pub use classifier::{classify, document_kind, is_page, LinkKind};
pub use coordinator::{Coordinator, CrawlOutcome};
pub use downloader::download_documents;
pub use fetcher::{build_http_client, fetch_page, PageFetch};
pub use parser::{parse_html, CandidateLink, ParsedPage};

use crate::config::Config;
use crate::state::CrawlBudget;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Walk the link graph depth-first from the seed
/// 3. Download qualifying documents until a budget is exhausted
/// 4. Return the downloaded-document descriptors and crawl statistics
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The URL to start crawling from
/// * `budget` - Depth and quota limits for this crawl
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Crawl completed; may contain zero documents
/// * `Err(LibrisError)` - Startup failed (bad seed, client, output directory)
pub async fn crawl(config: Config, seed: &str, budget: CrawlBudget) -> Result<CrawlOutcome> {
    Coordinator::new(config, budget)?.run(seed).await
}

//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives the bounded traversal:
//! - depth-first, left-to-right walk of the link graph from the seed
//! - terminal checks (depth, quota, deadline) before any network work
//! - the visited-set revisit guard (mark-then-fetch)
//! - per-URL failure isolation: one bad page kills one branch, never the crawl
//!
//! The descent is expressed as an explicit LIFO worklist of
//! `(url, remaining_depth)` entries rather than native recursion; children
//! are pushed in reverse page order, which reproduces recursive depth-first
//! preorder exactly while keeping stack depth flat at large depth budgets.

use crate::config::Config;
use crate::crawler::classifier::{classify, document_kind, LinkKind};
use crate::crawler::downloader::download_documents;
use crate::crawler::fetcher::{build_http_client, fetch_page, PageFetch};
use crate::crawler::parser::parse_html;
use crate::document::DownloadedDocument;
use crate::output::CrawlStats;
use crate::state::{CrawlBudget, CrawlProgress};
use crate::url::{normalize_url, parse_seed_url};
use crate::Result;
use chrono::Utc;
use reqwest::Client;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

/// Everything one crawl produced
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Descriptors for every persisted document, in download order
    pub documents: Vec<DownloadedDocument>,

    /// Counters describing the run
    pub stats: CrawlStats,
}

/// Main crawler coordinator structure
///
/// Owns the HTTP client, the budget, and the shared progress state for
/// exactly one top-level crawl invocation.
pub struct Coordinator {
    client: Client,
    budget: CrawlBudget,
    progress: CrawlProgress,
    output_dir: PathBuf,
    deadline: Option<Instant>,
    documents: Vec<DownloadedDocument>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Builds the HTTP client and ensures the output directory exists; both
    /// are the only fatal startup steps.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `budget` - Depth and quota limits for this crawl
    pub fn new(config: Config, budget: CrawlBudget) -> Result<Self> {
        let client = build_http_client(&config)?;

        let output_dir = PathBuf::from(&config.output.directory);
        std::fs::create_dir_all(&output_dir)?;

        let deadline = config
            .crawler
            .deadline_secs
            .map(|secs| Instant::now() + Duration::from_secs(secs));

        Ok(Self {
            client,
            budget,
            progress: CrawlProgress::new(),
            output_dir,
            deadline,
            documents: Vec::new(),
        })
    }

    /// Runs the crawl to completion
    ///
    /// Completion means one of: the worklist drained, the download quota was
    /// reached, or the deadline passed. None of these is an error; the only
    /// error case is a seed URL that cannot be crawled at all.
    ///
    /// # Arguments
    ///
    /// * `seed` - The URL to start from
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - Documents and statistics for the run
    /// * `Err(LibrisError)` - The seed URL is malformed or non-HTTP(S)
    pub async fn run(mut self, seed: &str) -> Result<CrawlOutcome> {
        let started_at = Utc::now();
        let seed_url = parse_seed_url(seed)?;

        tracing::info!(
            "Starting crawl of {} (max depth {}, max documents {})",
            seed_url,
            self.budget.max_depth,
            self.budget.max_documents
        );

        let mut worklist: Vec<(Url, u32)> = Vec::new();
        if self.budget.max_depth > 0 {
            worklist.push((seed_url, self.budget.max_depth));
        }

        while let Some((url, remaining_depth)) = worklist.pop() {
            // Terminal conditions, checked before any network work
            if self.budget.quota_reached(self.progress.downloaded) {
                tracing::info!("Download quota reached, stopping crawl");
                break;
            }

            if self.deadline_exceeded() {
                tracing::warn!("Crawl deadline exceeded, stopping");
                break;
            }

            // Revisit guard: claim the URL before fetching
            let identity = match normalize_url(&url) {
                Ok(identity) => identity,
                Err(e) => {
                    tracing::debug!("Skipping unnormalizable URL {}: {}", url, e);
                    continue;
                }
            };

            if !self.progress.claim(&identity) {
                tracing::debug!("Already visited {}, skipping", url);
                self.progress.revisits_skipped += 1;
                continue;
            }

            self.process_page(&url, remaining_depth, &mut worklist).await;
        }

        let stats = CrawlStats {
            pages_visited: self.progress.pages_visited,
            page_failures: self.progress.page_failures,
            documents_downloaded: self.progress.downloaded,
            document_failures: self.progress.document_failures,
            revisits_skipped: self.progress.revisits_skipped,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            "Crawl finished: {} documents from {} pages ({} page failures)",
            stats.documents_downloaded,
            stats.pages_visited,
            stats.page_failures
        );

        Ok(CrawlOutcome {
            documents: self.documents,
            stats,
        })
    }

    /// Processes a single page: fetch, extract, download, classify, push
    ///
    /// Fetch failures are recoverable per-URL failures: they are logged and
    /// counted, and only this page's subtree is abandoned. Nothing here
    /// propagates an error to the crawl loop.
    async fn process_page(&mut self, url: &Url, remaining_depth: u32, worklist: &mut Vec<(Url, u32)>) {
        tracing::debug!("Fetching page {} (remaining depth {})", url, remaining_depth);

        let body = match fetch_page(&self.client, url).await {
            PageFetch::Success { body, .. } => {
                self.progress.pages_visited += 1;
                body
            }
            PageFetch::HttpError { status_code } => {
                tracing::warn!("Error processing {}: HTTP {}", url, status_code);
                self.progress.page_failures += 1;
                return;
            }
            PageFetch::NetworkError { error } => {
                tracing::warn!("Error processing {}: {}", url, error);
                self.progress.page_failures += 1;
                return;
            }
        };

        let parsed = parse_html(&body, url);
        tracing::debug!("Extracted {} candidate links from {}", parsed.links.len(), url);

        // Documents first, in page order, against the shared counter
        let downloaded = download_documents(
            &self.client,
            &parsed.links,
            &self.output_dir,
            &self.budget,
            &mut self.progress,
            self.deadline,
        )
        .await;
        self.documents.extend(downloaded);

        // Recursion is pointless when the next level would be depth 0, the
        // quota is spent, or the deadline has passed; skip the HEAD probes too.
        if remaining_depth <= 1
            || self.budget.quota_reached(self.progress.downloaded)
            || self.deadline_exceeded()
        {
            return;
        }

        let mut pages = Vec::new();
        for link in parsed.links.iter() {
            if document_kind(&link.resolved).is_some() {
                continue;
            }

            if self.deadline_exceeded() {
                break;
            }

            if let LinkKind::Page = classify(&self.client, link).await {
                pages.push(link.resolved.clone());
            }
        }

        // LIFO worklist: reversed push keeps left-to-right traversal order
        for page in pages.into_iter().rev() {
            worklist.push((page, remaining_depth - 1));
        }
    }

    fn deadline_exceeded(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

//! Shared mutable crawl progress
//!
//! One `CrawlProgress` value is created per top-level crawl and passed by
//! mutable reference through every traversal step. The traversal is fully
//! sequential, so no locking is involved; a parallel redesign would need to
//! replace the counter with an atomic and serialize the check-then-increment.

use std::collections::HashSet;

/// Counters and visited set shared across the whole traversal tree
///
/// Invariant: `downloaded` never exceeds the budget's quota. The downloader
/// is the only writer of `downloaded`; the coordinator and downloader both
/// read it to decide whether to continue.
#[derive(Debug, Default)]
pub struct CrawlProgress {
    /// Documents successfully persisted so far; also the source of the
    /// sequence number assigned to each download
    pub downloaded: u32,

    /// Pages fetched and processed (successfully or not)
    pub pages_visited: u64,

    /// Page fetches that failed with a transport error or non-2xx status
    pub page_failures: u64,

    /// Document retrievals that failed and were skipped
    pub document_failures: u64,

    /// URLs skipped because they were already visited in this crawl
    pub revisits_skipped: u64,

    /// Normalized URLs already claimed for fetching (mark-then-fetch)
    visited: HashSet<String>,
}

impl CrawlProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL for fetching
    ///
    /// Returns true if the URL was not previously visited in this crawl.
    /// The URL is recorded before any fetch happens, so a page that later
    /// fails is still never retried within the same crawl.
    pub fn claim(&mut self, normalized_url: &str) -> bool {
        self.visited.insert(normalized_url.to_string())
    }

    /// Returns true if the URL has already been claimed
    pub fn is_visited(&self, normalized_url: &str) -> bool {
        self.visited.contains(normalized_url)
    }

    /// Number of distinct URLs claimed so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

//! Crawl statistics
//!
//! Counters describing one finished crawl, rendered to the console at the
//! end of a run.

use chrono::{DateTime, Utc};

/// Summary counters for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// Pages fetched and processed successfully
    pub pages_visited: u64,

    /// Page fetches that failed (transport error or non-2xx status)
    pub page_failures: u64,

    /// Documents persisted; equals the final value of the shared counter
    pub documents_downloaded: u32,

    /// Document retrievals that failed and were skipped
    pub document_failures: u64,

    /// URLs skipped by the revisit guard
    pub revisits_skipped: u64,

    /// When the crawl started
    pub started_at: DateTime<Utc>,

    /// When the crawl finished
    pub finished_at: DateTime<Utc>,
}

impl CrawlStats {
    /// Wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Total fetch attempts that failed, pages and documents combined
    pub fn total_failures(&self) -> u64 {
        self.page_failures + self.document_failures
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_stats(stats: &CrawlStats) {
    println!("=== Harvest Statistics ===\n");
    println!("Pages visited:        {}", stats.pages_visited);
    println!("Page failures:        {}", stats.page_failures);
    println!("Documents downloaded: {}", stats.documents_downloaded);
    println!("Document failures:    {}", stats.document_failures);
    println!("Revisits skipped:     {}", stats.revisits_skipped);
    println!("Duration:             {}s", stats.duration_seconds());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_stats() -> CrawlStats {
        CrawlStats {
            pages_visited: 4,
            page_failures: 1,
            documents_downloaded: 3,
            document_failures: 2,
            revisits_skipped: 5,
            started_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            finished_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 1, 30).unwrap(),
        }
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(sample_stats().duration_seconds(), 90);
    }

    #[test]
    fn test_total_failures() {
        assert_eq!(sample_stats().total_failures(), 3);
    }
}

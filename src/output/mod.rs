//! Output module for crawl results
//!
//! This module handles:
//! - Crawl statistics and their console rendering
//! - The markdown harvest manifest handed to catalog ingestion

mod manifest;
pub mod stats;

pub use manifest::{format_manifest, write_manifest};
pub use stats::{print_stats, CrawlStats};

//! Harvest manifest generation
//!
//! The manifest is the handoff artifact for catalog ingestion: a markdown
//! file listing every document the crawl persisted, with enough provenance
//! (source URL, fetch time, config hash) to trace a file back to its run.

use crate::document::DownloadedDocument;
use crate::output::stats::CrawlStats;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the harvest manifest to a file
///
/// # Arguments
///
/// * `documents` - Descriptors in download order
/// * `stats` - The run's statistics
/// * `config_hash` - Hash of the config file used, if one was loaded
/// * `output_path` - Path the markdown file is written to
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the manifest
/// * `Err(std::io::Error)` - Failed to create or write the file
pub fn write_manifest(
    documents: &[DownloadedDocument],
    stats: &CrawlStats,
    config_hash: Option<&str>,
    output_path: &Path,
) -> std::io::Result<()> {
    let markdown = format_manifest(documents, stats, config_hash);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats the harvest manifest as markdown
pub fn format_manifest(
    documents: &[DownloadedDocument],
    stats: &CrawlStats,
    config_hash: Option<&str>,
) -> String {
    let mut md = String::new();

    md.push_str("# Libris Harvest Manifest\n\n");

    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Started**: {}\n", stats.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", stats.finished_at.to_rfc3339()));
    md.push_str(&format!("- **Duration**: {} seconds\n", stats.duration_seconds()));
    if let Some(hash) = config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    md.push_str("## Statistics\n\n");
    md.push_str(&format!("- **Pages Visited**: {}\n", stats.pages_visited));
    md.push_str(&format!("- **Page Failures**: {}\n", stats.page_failures));
    md.push_str(&format!(
        "- **Documents Downloaded**: {}\n",
        stats.documents_downloaded
    ));
    md.push_str(&format!(
        "- **Document Failures**: {}\n",
        stats.document_failures
    ));
    md.push_str(&format!(
        "- **Revisits Skipped**: {}\n\n",
        stats.revisits_skipped
    ));

    md.push_str("## Documents\n\n");
    if documents.is_empty() {
        md.push_str("No documents were downloaded.\n");
    } else {
        md.push_str("| # | File | Kind | Source URL | Fetched |\n");
        md.push_str("|---|------|------|------------|--------|\n");
        for doc in documents {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                doc.sequence,
                doc.file_name,
                doc.kind,
                doc.source_url,
                doc.fetched_at.to_rfc3339()
            ));
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentKind;
    use chrono::{TimeZone, Utc};
    use url::Url;

    fn sample_stats() -> CrawlStats {
        CrawlStats {
            pages_visited: 2,
            page_failures: 0,
            documents_downloaded: 1,
            document_failures: 0,
            revisits_skipped: 0,
            started_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            finished_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 10).unwrap(),
        }
    }

    fn sample_document() -> DownloadedDocument {
        DownloadedDocument {
            sequence: 1,
            kind: DocumentKind::Pdf,
            source_url: Url::parse("https://example.com/books/a.pdf").unwrap(),
            file_name: "downloaded_file_1.pdf".to_string(),
            fetched_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 5).unwrap(),
        }
    }

    #[test]
    fn test_manifest_lists_documents() {
        let md = format_manifest(&[sample_document()], &sample_stats(), None);
        assert!(md.contains("downloaded_file_1.pdf"));
        assert!(md.contains("https://example.com/books/a.pdf"));
        assert!(md.contains("| 1 |"));
        assert!(md.contains("PDF"));
    }

    #[test]
    fn test_manifest_empty_run() {
        let md = format_manifest(&[], &sample_stats(), None);
        assert!(md.contains("No documents were downloaded."));
    }

    #[test]
    fn test_manifest_includes_config_hash() {
        let md = format_manifest(&[], &sample_stats(), Some("abc123"));
        assert!(md.contains("**Config Hash**: abc123"));
    }

    #[test]
    fn test_write_manifest_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.md");

        write_manifest(&[sample_document()], &sample_stats(), None, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Libris Harvest Manifest"));
    }
}

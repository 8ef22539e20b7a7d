//! Document downloader
//!
//! Retrieves and persists the document links found on one page, in page
//! order, under the global download quota. File names are deterministic:
//! `downloaded_file_<sequence>.<extension>`, where the sequence is the shared
//! download counter after the increment. The counter only advances on a
//! fully persisted document, so the produced names are always gapless.
//!
//! Retrieval failures are caught and skipped here, mirroring how the
//! coordinator treats page-fetch failures: one bad document never terminates
//! the page or the crawl, and each skip is surfaced through the
//! `document_failures` counter.

use crate::crawler::classifier::document_kind;
use crate::crawler::parser::CandidateLink;
use crate::document::DownloadedDocument;
use crate::state::{CrawlBudget, CrawlProgress};
use chrono::Utc;
use reqwest::Client;
use std::path::Path;
use std::time::Instant;
use url::Url;

/// Downloads the document links among a page's candidates
///
/// Iterates candidates in page order, skipping non-document links. The quota
/// and deadline are re-checked per candidate, so either can cut the batch
/// short mid-page; the returned descriptors may therefore cover fewer
/// documents than the page linked to.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `candidates` - All candidate links of the page, in document order
/// * `output_dir` - Directory files are written into (must exist)
/// * `budget` - The crawl's immutable limits
/// * `progress` - Shared counters; `downloaded` advances per persisted file
/// * `deadline` - Optional wall-clock cutoff for the whole crawl
///
/// # Returns
///
/// Descriptors for every document persisted from this page, in download order.
pub async fn download_documents(
    client: &Client,
    candidates: &[CandidateLink],
    output_dir: &Path,
    budget: &CrawlBudget,
    progress: &mut CrawlProgress,
    deadline: Option<Instant>,
) -> Vec<DownloadedDocument> {
    let mut documents = Vec::new();

    for link in candidates {
        let Some(kind) = document_kind(&link.resolved) else {
            continue;
        };

        // Quota can be hit mid-page; stop before issuing another request
        if budget.quota_reached(progress.downloaded) {
            tracing::debug!("Download quota reached, skipping remaining candidates");
            break;
        }

        if deadline.is_some_and(|d| Instant::now() >= d) {
            tracing::warn!("Deadline exceeded, skipping remaining candidates");
            break;
        }

        let bytes = match fetch_document(client, &link.resolved).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!("Failed to retrieve {}: {}", link.resolved, error);
                progress.document_failures += 1;
                continue;
            }
        };

        let sequence = progress.downloaded + 1;
        let file_name = DownloadedDocument::file_name_for(sequence, kind);
        let path = output_dir.join(&file_name);

        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => {
                progress.downloaded = sequence;
                tracing::info!("Download succeeded: {}", file_name);
                documents.push(DownloadedDocument {
                    sequence,
                    kind,
                    source_url: link.resolved.clone(),
                    file_name,
                    fetched_at: Utc::now(),
                });
            }
            Err(error) => {
                tracing::warn!("Failed to write {}: {}", path.display(), error);
                progress.document_failures += 1;
            }
        }
    }

    documents
}

/// Retrieves a document body, treating non-success statuses as failures
async fn fetch_document(client: &Client, url: &Url) -> Result<Vec<u8>, String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

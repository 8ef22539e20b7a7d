//! Document descriptors emitted by the harvester
//!
//! A crawl produces one [`DownloadedDocument`] per file it persisted. The
//! descriptors are what a downstream catalog-ingestion step consumes; the
//! crawler itself assigns no bibliographic metadata.

use chrono::{DateTime, Utc};
use url::Url;

/// The document formats the harvester retrieves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Epub,
}

impl DocumentKind {
    /// Returns the canonical file extension for this kind, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Epub => "epub",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Epub => write!(f, "EPUB"),
        }
    }
}

/// A document the crawler fetched and persisted to the output directory
#[derive(Debug, Clone)]
pub struct DownloadedDocument {
    /// Position in download order, starting at 1; equals the shared
    /// download counter at the moment this document was persisted
    pub sequence: u32,

    /// Whether the document is a PDF or an EPUB
    pub kind: DocumentKind,

    /// The absolute URL the document was retrieved from
    pub source_url: Url,

    /// File name within the output directory
    pub file_name: String,

    /// When the document was retrieved
    pub fetched_at: DateTime<Utc>,
}

impl DownloadedDocument {
    /// Derives the deterministic file name for a download
    ///
    /// Naming is `downloaded_file_<sequence>.<extension>`, so a crawl that
    /// persists `k` documents produces names numbered `1..k` with no gaps.
    pub fn file_name_for(sequence: u32, kind: DocumentKind) -> String {
        format!("downloaded_file_{}.{}", sequence, kind.extension())
    }
}

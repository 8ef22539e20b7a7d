use serde::Deserialize;

/// Main configuration structure for Libris
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Maximum traversal depth from the seed URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Global download quota for one crawl
    #[serde(rename = "max-documents", default = "default_max_documents")]
    pub max_documents: u32,

    /// Overall wall-clock deadline for one crawl, in seconds; absent means
    /// the crawl is bounded only by depth and quota
    #[serde(rename = "deadline-secs", default)]
    pub deadline_secs: Option<u64>,

    /// Disable TLS certificate verification for every request.
    /// Off by default; only for crawling hosts with broken certificates.
    #[serde(rename = "accept-invalid-certs", default)]
    pub accept_invalid_certs: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_documents: default_max_documents(),
            deadline_secs: None,
            accept_invalid_certs: false,
        }
    }
}

fn default_max_depth() -> u32 {
    2
}

fn default_max_documents() -> u32 {
    5
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

fn default_crawler_name() -> String {
    "Libris".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://example.com/libris".to_string()
}

fn default_contact_email() -> String {
    "libris@example.com".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory downloaded documents are written into
    #[serde(rename = "directory", default = "default_directory")]
    pub directory: String,

    /// Path of the markdown harvest manifest
    #[serde(rename = "manifest-path", default = "default_manifest_path")]
    pub manifest_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            manifest_path: default_manifest_path(),
        }
    }
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_manifest_path() -> String {
    "./harvest_manifest.md".to_string()
}

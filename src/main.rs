//! Libris main entry point
//!
//! Command-line interface for the bounded document harvester.

use anyhow::Context;
use clap::Parser;
use libris::config::{load_config_with_hash, validate, Config};
use libris::crawler::crawl;
use libris::output::{print_stats, write_manifest};
use libris::state::CrawlBudget;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Libris: a bounded digital-library harvester
///
/// Libris crawls a link graph from a seed page and downloads the PDF and
/// EPUB documents it finds, bounded by a depth budget and a global download
/// quota. Downloaded files land in the output directory together with a
/// markdown manifest for catalog ingestion.
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(version)]
#[command(about = "A bounded digital-library harvester", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Maximum traversal depth from the seed (overrides config)
    #[arg(short, long)]
    depth: Option<u32>,

    /// Maximum number of documents to download (overrides config)
    #[arg(short = 'n', long)]
    max_docs: Option<u32>,

    /// Directory downloaded documents are written into (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overall wall-clock deadline in seconds (overrides config)
    #[arg(long)]
    deadline: Option<u64>,

    /// Disable TLS certificate verification (not recommended)
    #[arg(long)]
    insecure: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, if a file was given; defaults otherwise
    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    // CLI flags override config-file values
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(max_docs) = cli.max_docs {
        config.crawler.max_documents = max_docs;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.to_string_lossy().into_owned();
    }
    if let Some(deadline) = cli.deadline {
        config.crawler.deadline_secs = Some(deadline);
    }
    if cli.insecure {
        config.crawler.accept_invalid_certs = true;
    }

    validate(&config).context("Invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&cli.seed_url, &config);
        return Ok(());
    }

    handle_crawl(&cli.seed_url, config, config_hash.as_deref()).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("libris=info,warn"),
            1 => EnvFilter::new("libris=debug,info"),
            2 => EnvFilter::new("libris=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(seed_url: &str, config: &Config) {
    println!("=== Libris Dry Run ===\n");

    println!("Seed URL: {}", seed_url);

    println!("\nCrawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Max documents: {}", config.crawler.max_documents);
    match config.crawler.deadline_secs {
        Some(secs) => println!("  Deadline: {}s", secs),
        None => println!("  Deadline: none"),
    }
    println!(
        "  TLS verification: {}",
        if config.crawler.accept_invalid_certs {
            "DISABLED"
        } else {
            "enabled"
        }
    );

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);
    println!("  Manifest: {}", config.output.manifest_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(
    seed_url: &str,
    config: Config,
    config_hash: Option<&str>,
) -> anyhow::Result<()> {
    let budget = CrawlBudget::new(config.crawler.max_depth, config.crawler.max_documents);
    let manifest_path = PathBuf::from(&config.output.manifest_path);

    let outcome = crawl(config, seed_url, budget)
        .await
        .context("Crawl failed")?;

    write_manifest(
        &outcome.documents,
        &outcome.stats,
        config_hash,
        &manifest_path,
    )
    .with_context(|| format!("Failed to write manifest to {}", manifest_path.display()))?;

    print_stats(&outcome.stats);
    println!("\n✓ Manifest written to: {}", manifest_path.display());

    Ok(())
}

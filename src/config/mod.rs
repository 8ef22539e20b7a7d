//! Configuration module for Libris
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every key is optional; built-in defaults apply so the binary runs
//! without a config file, and CLI flags override whatever was loaded.
//!
//! # Example
//!
//! ```no_run
//! use libris::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("libris.toml")).unwrap();
//! println!("Default max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

// Re-export validation for CLI overrides that bypass the file parser
pub use validation::validate;

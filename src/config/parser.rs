use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use libris::config::load_config;
///
/// let config = load_config(Path::new("libris.toml")).unwrap();
/// println!("Max documents: {}", config.crawler.max_documents);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Recorded in the harvest manifest so a downstream consumer can tell which
/// configuration produced a given batch of documents.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok((Config, String))` - Successfully loaded configuration and its hash
/// * `Err(ConfigError)` - Failed to load or parse the configuration
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-depth = 3
max-documents = 10
deadline-secs = 120

[user-agent]
crawler-name = "TestHarvester"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[output]
directory = "./downloads"
manifest-path = "./downloads/manifest.md"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_depth, 3);
        assert_eq!(config.crawler.max_documents, 10);
        assert_eq!(config.crawler.deadline_secs, Some(120));
        assert!(!config.crawler.accept_invalid_certs);
        assert_eq!(config.user_agent.crawler_name, "TestHarvester");
        assert_eq!(config.output.directory, "./downloads");
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_depth, 2);
        assert_eq!(config.crawler.max_documents, 5);
        assert_eq!(config.crawler.deadline_secs, None);
        assert_eq!(config.output.directory, ".");
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let config_content = r#"
[crawler]
max-documents = 50
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_documents, 50);
        assert_eq!(config.crawler.max_depth, 2);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let config_content = r#"
[crawler]
max-dpeth = 3
"#;
        let file = create_temp_config(config_content);
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let file = create_temp_config("[crawler\nmax-depth = 3");
        assert!(matches!(
            load_config(file.path()),
            Err(crate::ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config(Path::new("/nonexistent/libris.toml"));
        assert!(matches!(result, Err(crate::ConfigError::Io(_))));
    }

    #[test]
    fn test_config_hash_is_stable() {
        let file = create_temp_config("[crawler]\nmax-depth = 1\n");
        let first = compute_config_hash(file.path()).unwrap();
        let second = compute_config_hash(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_config_hash_changes_with_content() {
        let a = create_temp_config("[crawler]\nmax-depth = 1\n");
        let b = create_temp_config("[crawler]\nmax-depth = 2\n");
        assert_ne!(
            compute_config_hash(a.path()).unwrap(),
            compute_config_hash(b.path()).unwrap()
        );
    }
}

//! Configuration loading and types for the site generator.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files (`load`)
//!
//! Paths in the config file are resolved relative to the config file's
//! directory, never hardcoded (the driver injects `content` and `output`
//! rather than baking absolute paths into the build).

mod load;
mod types;

use serde::{Deserialize, Serialize};

// Re-export all types for convenient access
pub use types::SiteConfig;

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),
}

// =============================================================================
// Top-level config
// =============================================================================

/// The top-level configuration for a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = serde_yaml::from_str("site:\n  name: mordechai.dev\n").unwrap();
        assert_eq!(config.site.name, "mordechai.dev");
        assert_eq!(config.site.content, std::path::PathBuf::from("content"));
        assert_eq!(config.site.output, std::path::PathBuf::from("build"));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "site:\n  name: mordechai.dev\n  content: ./pages\n  output: ./dist\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.content, std::path::PathBuf::from("./pages"));
        assert_eq!(config.site.output, std::path::PathBuf::from("./dist"));
    }

    #[test]
    fn test_missing_site_is_an_error() {
        let result: Result<Config, _> = serde_yaml::from_str("output: build\n");
        assert!(result.is_err());
    }
}

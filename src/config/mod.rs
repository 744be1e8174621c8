//! Configuration loading and types for sitemapgen.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading and layering configs from files, environment, and CLI (`load`)

mod load;
mod types;

use std::path::PathBuf;

pub use types::{RuleSpec, SitemapConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sitemap.yaml";

/// Prefix for environment variable overrides (`SITEMAP_PUBLISH_DIR`, ...).
pub const ENV_PREFIX: &str = "SITEMAP";

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(PathBuf),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("missing required setting '{0}' (set it in sitemap.yaml, via SITEMAP_* or on the command line)")]
    Missing(&'static str),
}

// =============================================================================
// Command line overrides
// =============================================================================

/// Values given on the command line, applied on top of file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub publish_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    /// Appended after any rules from the config file
    pub rules: Vec<RuleSpec>,
}

// =============================================================================
// Resolved settings
// =============================================================================

/// A fully merged configuration with every required value present.
#[derive(Debug, Clone)]
pub struct Settings {
    pub publish_dir: PathBuf,
    pub base_url: String,
    pub rules: Vec<RuleSpec>,
}

impl SitemapConfig {
    /// Apply command line overrides and check that required values are set.
    pub fn into_settings(self, overrides: ConfigOverrides) -> Result<Settings, ConfigError> {
        let publish_dir = overrides
            .publish_dir
            .or(self.publish_dir)
            .ok_or(ConfigError::Missing("publish_dir"))?;
        let base_url = overrides
            .base_url
            .or(self.base_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("base_url"))?;

        let mut rules = self.rules;
        rules.extend(overrides.rules);

        Ok(Settings {
            publish_dir,
            base_url,
            rules,
        })
    }
}

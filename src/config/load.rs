//! Configuration loading from files and the environment.

use std::path::{Path, PathBuf};

use super::{ConfigError, DEFAULT_CONFIG_FILE, ENV_PREFIX, SitemapConfig};

impl SitemapConfig {
    /// Load the config from the command line argument, defaulting to `sitemap.yaml`.
    ///
    /// The default file is optional; an explicitly named file must exist.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let required = config_file.is_some();
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file, required)
    }

    /// Load the config from a file path, layered under `SITEMAP_*` environment variables.
    ///
    /// A relative `publish_dir` read from the file is resolved against the
    /// file's directory; one from the environment stays relative to the
    /// working directory.
    pub(crate) fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let mut config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(required))
            .build()?
            .try_deserialize::<SitemapConfig>()?;

        if path.is_file() {
            let base_path = base_path_from_config(path);
            config.publish_dir = config.publish_dir.map(|dir| {
                if dir.is_relative() {
                    base_path.join(dir)
                } else {
                    dir
                }
            });
        }

        let env = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize::<SitemapConfig>()?;
        config.publish_dir = env.publish_dir.or(config.publish_dir);
        config.base_url = env.base_url.or(config.base_url);

        Ok(config)
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

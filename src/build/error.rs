//! Sitemap generation error types.

use std::path::PathBuf;

/// Broad classification of a [`SitemapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The inputs are unusable (missing directory, bad base URL)
    Configuration,
    /// Reading the publish directory or writing the sitemap failed
    Io,
}

/// Errors that can occur while generating a sitemap.
#[derive(thiserror::Error, Debug)]
pub enum SitemapError {
    #[error("publish directory must not be empty")]
    EmptyPublishDir,

    #[error("publish directory does not exist: {0}")]
    PublishDirNotFound(PathBuf),

    #[error("publish directory is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize sitemap: {0}")]
    Serialize(std::io::Error),

    #[error("failed to write sitemap {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SitemapError {
    /// Create an invalid base URL error.
    pub fn invalid_base_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPublishDir
            | Self::PublishDirNotFound(_)
            | Self::NotADirectory(_)
            | Self::InvalidBaseUrl { .. } => ErrorKind::Configuration,
            Self::CwdFailure(_)
            | Self::ReadDir { .. }
            | Self::ReadEntry { .. }
            | Self::Serialize(_)
            | Self::Write { .. } => ErrorKind::Io,
        }
    }
}

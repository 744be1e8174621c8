//! In-memory sitemap document.
//!
//! Building is pure: the caller supplies the URLs, the compiled rules and
//! the `lastmod` date, so the same inputs always produce the same document.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use url::Url;

use super::error::SitemapError;
use super::paths::UrlMapper;
use super::rules::RuleSet;

/// XML namespace of the sitemap 0.9 protocol.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Change frequency used when no rule sets one.
pub const DEFAULT_CHANGEFREQ: &str = "daily";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: String,
    pub priority: String,
}

/// An ordered list of sitemap entries with unique locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    /// Build a document from deduplicated URLs, keeping their order.
    pub fn build(
        urls: &[String],
        rules: &RuleSet,
        lastmod: NaiveDate,
    ) -> Result<Self, SitemapError> {
        let lastmod = lastmod.format("%Y-%m-%d").to_string();

        let entries = urls
            .iter()
            .map(|loc| {
                let parsed = Url::parse(loc).map_err(|e| SitemapError::invalid_base_url(loc, e))?;
                let path = parsed.path().to_lowercase();
                let rule = rules.find(&path);

                Ok(SitemapEntry {
                    loc: loc.clone(),
                    lastmod: lastmod.clone(),
                    changefreq: rule
                        .and_then(|r| r.changefreq.clone())
                        .unwrap_or_else(|| DEFAULT_CHANGEFREQ.to_string()),
                    priority: rule
                        .and_then(|r| r.priority.clone())
                        .unwrap_or_else(|| default_priority(&path).to_string()),
                })
            })
            .collect::<Result<Vec<_>, SitemapError>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Priority for a page no rule covers: the site root ranks highest.
pub fn default_priority(path: &str) -> &'static str {
    match path {
        "/" | "/index" => "1.0",
        _ => "0.5",
    }
}

/// Map files under `root` to URLs and build the sitemap for them.
///
/// Files are processed in path string order; when two files map to the same URL
/// the first one wins.
pub fn build_sitemap(
    files: &[PathBuf],
    root: &Path,
    base_url: &str,
    rules: &RuleSet,
    lastmod: NaiveDate,
) -> Result<SitemapDocument, SitemapError> {
    let mut files: Vec<&PathBuf> = files.iter().collect();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let mut mapper = UrlMapper::new(root, base_url);
    let urls: Vec<String> = files.into_iter().filter_map(|file| mapper.map(file)).collect();

    SitemapDocument::build(&urls, rules, lastmod)
}

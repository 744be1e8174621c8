use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use url::Url;

use crate::config::Settings;

use super::error::SitemapError;
use super::input::PublishDir;
use super::rules::RuleSet;
use super::sitemap::{SitemapDocument, build_sitemap};
use super::write::{render_sitemap, write_sitemap};

#[derive(Debug)]
pub struct GenerateResult {
    pub output_path: PathBuf,
    pub html_files: usize,
    pub urls: usize,
}

/// A sitemap ready to be written, plus where it would go.
#[derive(Debug)]
pub struct PreparedSitemap {
    pub output_path: PathBuf,
    pub html_files: usize,
    pub document: SitemapDocument,
}

#[derive(Debug)]
pub struct Generator {
    settings: Settings,
    /// Date stamped on every entry; defaults to today in UTC
    lastmod: NaiveDate,
}

impl Generator {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            lastmod: Utc::now().date_naive(),
        }
    }

    #[cfg(test)]
    pub fn with_lastmod(mut self, lastmod: NaiveDate) -> Self {
        self.lastmod = lastmod;
        self
    }

    /// Generate the sitemap and write it to `<publish_dir>/sitemap.xml`.
    pub fn generate(&self) -> Result<GenerateResult, SitemapError> {
        let prepared = self.prepare()?;

        write_sitemap(&prepared.document, &prepared.output_path)?;
        tracing::info!(
            "Generated sitemap with {} URL(s) at {}",
            prepared.document.len(),
            prepared.output_path.display()
        );

        Ok(GenerateResult {
            urls: prepared.document.len(),
            html_files: prepared.html_files,
            output_path: prepared.output_path,
        })
    }

    /// Generate the sitemap without writing it, returning the rendered XML.
    pub fn preview(&self) -> Result<(PreparedSitemap, Vec<u8>), SitemapError> {
        let prepared = self.prepare()?;
        let xml = render_sitemap(&prepared.document)?;
        Ok((prepared, xml))
    }

    /// Run every stage up to, but not including, writing the file.
    pub fn prepare(&self) -> Result<PreparedSitemap, SitemapError> {
        // Pipeline:
        // 1. Resolve the publish directory
        // 2. Validate the base URL
        // 3. Discover HTML files
        // 4. Compile rules
        // 5. Map files to URLs and build the document

        // Step 1: Resolve the publish directory
        let publish_dir = PublishDir::resolve(&self.settings.publish_dir)?;
        tracing::info!(
            "Generating sitemap at {} for: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%SZ"),
            publish_dir.root().display()
        );
        tracing::info!("BaseUrl: {}", self.settings.base_url);

        // Step 2: Validate the base URL
        validate_base_url(&self.settings.base_url)?;

        // Step 3: Discover HTML files
        let files = publish_dir.html_files()?;
        tracing::info!("Found {} HTML file(s)", files.len());

        // Step 4: Compile rules
        let rules = RuleSet::compile(&self.settings.rules);
        tracing::info!("Rules count: {}", rules.len());
        for rule in rules.iter() {
            tracing::debug!(
                "Rule {}: priority={:?} changefreq={:?}",
                rule.prefix,
                rule.priority,
                rule.changefreq
            );
        }

        // Step 5: Build the document
        let document = build_sitemap(
            &files,
            publish_dir.root(),
            &self.settings.base_url,
            &rules,
            self.lastmod,
        )?;

        Ok(PreparedSitemap {
            output_path: publish_dir.sitemap_path(),
            html_files: files.len(),
            document,
        })
    }
}

/// Check that the base URL is absolute and can carry a path.
fn validate_base_url(base_url: &str) -> Result<(), SitemapError> {
    let url = Url::parse(base_url).map_err(|e| SitemapError::invalid_base_url(base_url, e))?;
    if url.cannot_be_a_base() {
        return Err(SitemapError::invalid_base_url(
            base_url,
            "URL cannot have a path appended",
        ));
    }
    Ok(())
}

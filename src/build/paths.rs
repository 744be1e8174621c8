//! Path and URL conversion utilities.
//!
//! This module converts published HTML file paths into the absolute URLs
//! they are served at.

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::util::strip_suffix_ignore_ascii_case;

/// Convert a publish-relative HTML path to a URL path.
///
/// # Examples
/// ```ignore
/// file_path_to_url_path("index.html") => "/"
/// file_path_to_url_path("about/index.html") => "/about/"
/// file_path_to_url_path("blog/post.html") => "/blog/post"
/// ```
pub fn file_path_to_url_path(relative: &Path) -> String {
    // Join with '/' whatever the platform separator is; leading separators vanish here
    let path_str = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");

    // Index files become the directory URL; the match is on the literal suffix
    let path_str = if let Some(dir) = strip_suffix_ignore_ascii_case(&path_str, "index.html") {
        dir
    } else if let Some(page) = strip_suffix_ignore_ascii_case(&path_str, ".html") {
        page
    } else {
        &path_str
    };

    if path_str.starts_with('/') {
        path_str.to_string()
    } else {
        format!("/{path_str}")
    }
}

/// Maps HTML files under a publish root to unique absolute URLs.
///
/// The first file to produce a URL wins; URLs that differ only by a
/// trailing slash (`/about` and `/about/`) count as the same page.
pub struct UrlMapper<'a> {
    root: &'a Path,
    base_url: &'a str,
    seen: HashSet<String>,
}

impl<'a> UrlMapper<'a> {
    pub fn new(root: &'a Path, base_url: &'a str) -> Self {
        Self {
            root,
            base_url: base_url.trim_end_matches('/'),
            seen: HashSet::new(),
        }
    }

    /// Map a file to its absolute URL, or `None` if the URL was already produced.
    pub fn map(&mut self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(self.root).unwrap_or(file);
        let url = format!("{}{}", self.base_url, file_path_to_url_path(relative));

        if self.seen.insert(url.trim_end_matches('/').to_string()) {
            Some(url)
        } else {
            tracing::debug!("Skipping {} ({} is already in the sitemap)", file.display(), url);
            None
        }
    }
}

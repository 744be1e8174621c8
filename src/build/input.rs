//! Publish directory resolution and HTML discovery.

use std::path::{Path, PathBuf};

use super::error::SitemapError;
use crate::util::strip_suffix_ignore_ascii_case;

/// File name of the generated sitemap inside the publish directory.
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

/// A validated publish directory.
#[derive(Debug, Clone)]
pub struct PublishDir {
    root: PathBuf,
}

impl PublishDir {
    /// Resolve and validate a publish directory.
    ///
    /// Relative paths are resolved against the current working directory and
    /// trailing separators are normalized away, so the root always joins
    /// with exactly one separator.
    pub fn resolve(path: &Path) -> Result<Self, SitemapError> {
        if path.as_os_str().is_empty() {
            return Err(SitemapError::EmptyPublishDir);
        }

        let path = if path.is_relative() {
            std::env::current_dir()
                .map_err(SitemapError::CwdFailure)?
                .join(path)
        } else {
            path.to_path_buf()
        };
        let root: PathBuf = path.components().collect();

        if !root.exists() {
            return Err(SitemapError::PublishDirNotFound(root));
        }
        if !root.is_dir() {
            return Err(SitemapError::NotADirectory(root));
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the sitemap for this directory is written.
    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join(SITEMAP_FILE_NAME)
    }

    /// Find every `.html` file under the directory, sorted by path string.
    ///
    /// The extension is matched case-insensitively and hidden directories
    /// are included.
    pub fn html_files(&self) -> Result<Vec<PathBuf>, SitemapError> {
        let mut files = Vec::new();
        walk_directory(&self.root, &mut files)?;
        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        Ok(files)
    }
}

/// Recursively walk a directory and collect HTML files.
fn walk_directory(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SitemapError> {
    let entries = std::fs::read_dir(dir).map_err(|e| SitemapError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| SitemapError::ReadEntry {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_dir() {
            walk_directory(&path, files)?;
        } else if path.is_file() && is_html_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_html_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| strip_suffix_ignore_ascii_case(name, ".html").is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn test_resolve_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = PublishDir::resolve(&missing).unwrap_err();
        assert!(matches!(err, SitemapError::PublishDirNotFound(_)));
    }

    #[test]
    fn test_resolve_empty_path() {
        let err = PublishDir::resolve(Path::new("")).unwrap_err();
        assert!(matches!(err, SitemapError::EmptyPublishDir));
    }

    #[test]
    fn test_resolve_file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.html");

        let err = PublishDir::resolve(&dir.path().join("index.html")).unwrap_err();
        assert!(matches!(err, SitemapError::NotADirectory(_)));
    }

    #[test]
    fn test_resolve_trims_trailing_separator() {
        let dir = tempfile::tempdir().unwrap();
        let with_slash = PathBuf::from(format!("{}/", dir.path().display()));

        let publish = PublishDir::resolve(&with_slash).unwrap();
        assert_eq!(publish.root(), dir.path());
        assert_eq!(publish.sitemap_path(), dir.path().join("sitemap.xml"));
    }

    #[test]
    fn test_html_files_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "zeta.html");
        touch(dir.path(), "blog-x.html");
        touch(dir.path(), "index.html");
        touch(dir.path(), "blog/2024/post.HTML");
        touch(dir.path(), ".hidden/page.html");
        touch(dir.path(), "styles.css");
        touch(dir.path(), "notes.htm");

        let publish = PublishDir::resolve(dir.path()).unwrap();
        let files: Vec<PathBuf> = publish
            .html_files()
            .unwrap()
            .into_iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            files,
            vec![
                PathBuf::from(".hidden/page.html"),
                PathBuf::from("blog-x.html"),
                PathBuf::from("blog/2024/post.HTML"),
                PathBuf::from("index.html"),
                PathBuf::from("zeta.html"),
            ]
        );
    }
}

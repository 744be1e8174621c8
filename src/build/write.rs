//! Sitemap serialization.
//!
//! Renders a [`SitemapDocument`] as sitemap 0.9 XML and writes it to disk.

use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::error::SitemapError;
use super::sitemap::{SITEMAP_NAMESPACE, SitemapDocument};

/// Render the document as indented UTF-8 XML.
pub fn render_sitemap(doc: &SitemapDocument) -> Result<Vec<u8>, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))
        .map_err(SitemapError::Serialize)?;
    writer
        .write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
        ))
        .map_err(SitemapError::Serialize)?;

    for entry in doc.entries() {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(SitemapError::Serialize)?;

        for (name, value) in [
            ("loc", &entry.loc),
            ("lastmod", &entry.lastmod),
            ("changefreq", &entry.changefreq),
            ("priority", &entry.priority),
        ] {
            writer
                .create_element(name)
                .write_text_content(BytesText::new(value))
                .map_err(SitemapError::Serialize)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(SitemapError::Serialize)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(SitemapError::Serialize)?;

    let mut xml = writer.into_inner();
    xml.push(b'\n');
    Ok(xml)
}

/// Render the document and write it to `path`, replacing any existing file.
pub fn write_sitemap(doc: &SitemapDocument, path: &Path) -> Result<(), SitemapError> {
    let xml = render_sitemap(doc)?;

    std::fs::write(path, xml).map_err(|e| SitemapError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::rules::RuleSet;
    use chrono::NaiveDate;

    fn document(urls: &[&str]) -> SitemapDocument {
        let urls: Vec<String> = urls.iter().map(|u| u.to_string()).collect();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        SitemapDocument::build(&urls, &RuleSet::default(), date).unwrap()
    }

    #[test]
    fn test_render_layout() {
        let xml = render_sitemap(&document(&["https://example.com/about"])).unwrap();
        let xml = String::from_utf8(xml).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn test_render_preserves_order() {
        let xml = render_sitemap(&document(&[
            "https://example.com/b",
            "https://example.com/a",
        ]))
        .unwrap();
        let xml = String::from_utf8(xml).unwrap();

        let b = xml.find("https://example.com/b").unwrap();
        let a = xml.find("https://example.com/a").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_render_escapes_text() {
        let xml = render_sitemap(&document(&["https://example.com/a?x=1&y=2"])).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.contains("<loc>https://example.com/a?x=1&amp;y=2</loc>"));
    }

    #[test]
    fn test_render_empty_document() {
        let xml = render_sitemap(&SitemapDocument::default()).unwrap();
        let xml = String::from_utf8(xml).unwrap();
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        std::fs::write(&path, "stale").unwrap();

        write_sitemap(&document(&["https://example.com/"]), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sitemap.xml");

        let err = write_sitemap(&document(&["https://example.com/"]), &path).unwrap_err();
        assert!(matches!(err, SitemapError::Write { .. }));
    }
}

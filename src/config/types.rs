//! Configuration type definitions.
//!
//! These types are pure data - no I/O or complex logic.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Sitemap configuration
// =============================================================================

/// Configuration for a single sitemap generation run.
///
/// YAML format:
/// ```yaml
/// publish_dir: ./_site
/// base_url: https://example.com
/// rules:
///   - prefix: /blog
///     priority: "0.8"
///     changefreq: weekly
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Directory containing the published HTML output
    pub publish_dir: Option<PathBuf>,
    /// Absolute base URL of the site, trailing slash optional
    pub base_url: Option<String>,
    /// Per-path-prefix overrides
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

// =============================================================================
// Prefix overrides
// =============================================================================

/// An uncompiled prefix override, as written in config or on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// URL path prefix the rule applies to (matched case-insensitively)
    pub prefix: String,
    /// Crawl priority, e.g. "0.8"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// One of always|hourly|daily|weekly|monthly|yearly|never (not validated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
}

impl RuleSpec {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            priority: None,
            changefreq: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }
}

/// Parses the compact command line form `PREFIX[:PRIORITY[:CHANGEFREQ]]`.
///
/// Empty segments are left unset, so `/news::hourly` only overrides the
/// change frequency.
impl FromStr for RuleSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let prefix = parts.next().unwrap_or_default();
        if prefix.is_empty() {
            return Err(format!("rule '{s}' is missing a path prefix"));
        }

        let segment = |part: Option<&str>| part.filter(|p| !p.is_empty()).map(str::to_string);

        Ok(Self {
            prefix: prefix.to_string(),
            priority: segment(parts.next()),
            changefreq: segment(parts.next()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_spec_from_str_full() {
        let rule: RuleSpec = "/blog:0.8:weekly".parse().unwrap();
        assert_eq!(
            rule,
            RuleSpec::new("/blog").with_priority("0.8").with_changefreq("weekly")
        );
    }

    #[test]
    fn test_rule_spec_from_str_partial() {
        let rule: RuleSpec = "/docs".parse().unwrap();
        assert_eq!(rule, RuleSpec::new("/docs"));

        let rule: RuleSpec = "/docs:0.3".parse().unwrap();
        assert_eq!(rule, RuleSpec::new("/docs").with_priority("0.3"));

        let rule: RuleSpec = "/news::hourly".parse().unwrap();
        assert_eq!(rule, RuleSpec::new("/news").with_changefreq("hourly"));
    }

    #[test]
    fn test_rule_spec_from_str_missing_prefix() {
        assert!(":0.5".parse::<RuleSpec>().is_err());
        assert!("".parse::<RuleSpec>().is_err());
    }

    #[test]
    fn test_sitemap_config_yaml() {
        let yaml = r#"
publish_dir: ./_site
base_url: https://example.com
rules:
  - prefix: /blog
    priority: "0.8"
    changefreq: weekly
  - prefix: /drafts
    priority: "0.1"
"#;
        let config: SitemapConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.publish_dir, Some(PathBuf::from("./_site")));
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[1], RuleSpec::new("/drafts").with_priority("0.1"));
    }

    #[test]
    fn test_sitemap_config_rules_default_empty() {
        let config: SitemapConfig = serde_yaml::from_str("base_url: https://example.com").unwrap();
        assert!(config.rules.is_empty());
        assert!(config.publish_dir.is_none());
    }
}

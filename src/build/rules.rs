//! Prefix override rules.
//!
//! Rules are compiled once per run into a list ordered longest prefix
//! first, so a linear scan returns the most specific match.

use crate::config::RuleSpec;
use crate::util::non_empty;

/// A compiled prefix override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Lowercased URL path prefix
    pub prefix: String,
    pub priority: Option<String>,
    pub changefreq: Option<String>,
}

impl Rule {
    fn compile(spec: &RuleSpec) -> Self {
        Self {
            prefix: spec.prefix.to_lowercase(),
            priority: non_empty(spec.priority.clone()),
            changefreq: non_empty(spec.changefreq.clone()),
        }
    }
}

/// Compiled rules, ordered by descending prefix length.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile rule specs.
    ///
    /// Equal-length prefixes keep their input order (the sort is stable).
    pub fn compile(specs: &[RuleSpec]) -> Self {
        let mut rules: Vec<Rule> = specs.iter().map(Rule::compile).collect();
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.prefix.chars().count()));
        Self { rules }
    }

    /// Find the most specific rule for a lowercased URL path.
    pub fn find(&self, path: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| path.starts_with(&rule.prefix))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

pub mod catalogue;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{RestyleError, RestyleResult, RuleError};

/// A single pattern/replacement pair. The pattern is a compiled regex;
/// the replacement may carry `$n` back-references.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    fn compile(index: usize, pattern: &str, replacement: &str) -> Result<Self, RuleError> {
        if pattern.is_empty() {
            return Err(RuleError::EmptyPattern { index });
        }

        let pattern = Regex::new(pattern)
            .map_err(|source| RuleError::BadPattern { index, source })?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Substitute every non-overlapping match, left to right. Returns a
    /// borrowed Cow when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// An ordered, immutable collection of rewrite rules. Order is fixed at
/// construction and significant: each rule's output feeds the next rule's
/// input, so a later rule may match text introduced by an earlier one.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    /// Compile an ordered list of pattern/replacement pairs. Fails on the
    /// first malformed pattern, before any file is touched.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (pattern, replacement))| {
                RewriteRule::compile(index, pattern, replacement)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// The built-in responsive-class catalogue, compiled once.
    pub fn builtin() -> &'static RuleSet {
        static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
            RuleSet::from_pairs(catalogue::CATALOGUE.iter().copied())
                .expect("built-in rule catalogue failed to compile")
        });

        &BUILTIN
    }

    /// Load a RuleSet from a TOML file of `[[rule]]` tables with `pattern`
    /// and `replacement` keys, preserving file order.
    pub fn from_toml_file(path: impl AsRef<Path>) -> RestyleResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|source| RuleError::UnreadableRuleFile {
                path: path.to_path_buf(),
                source,
            })?;

        let file: RuleFile =
            toml::from_str(&content).map_err(|e| RuleError::InvalidRuleFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let set = Self::from_pairs(
            file.rule
                .iter()
                .map(|r| (r.pattern.as_str(), r.replacement.as_str())),
        )?;

        if set.is_empty() {
            return Err(RestyleError::InvalidInput(format!(
                "Rule file {:?} contains no rules",
                path
            )));
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter()
    }
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    rule: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    pattern: String,
    replacement: String,
}

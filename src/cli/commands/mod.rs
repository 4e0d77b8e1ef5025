pub mod preview;
pub mod rules;
pub mod run;

pub use restyle::error::display_error;

use anyhow::Result;
use restyle::rules::RuleSet;
use std::path::PathBuf;

/// Resolve the active RuleSet: a custom TOML file when given, the
/// built-in catalogue otherwise. Pattern defects fail here, before any
/// file is touched.
pub fn load_rules(rule_file: Option<&PathBuf>) -> Result<RuleSet> {
    match rule_file {
        Some(path) => Ok(RuleSet::from_toml_file(path)?),
        None => Ok(RuleSet::builtin().clone()),
    }
}

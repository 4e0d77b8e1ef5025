use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use restyle::engine;

pub fn handle(file: &Path, rule_file: Option<&PathBuf>) -> Result<()> {
    let rules = super::load_rules(rule_file)?;

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let rewrite = engine::apply(&content, &rules);

    print!("{}", rewrite.text);
    if !rewrite.text.ends_with('\n') {
        println!();
    }

    if rewrite.changed() {
        eprintln!(
            "{} {} rules fired (file not written)",
            "→".bright_cyan(),
            rewrite.rules_fired
        );
    } else {
        eprintln!("{} no changes needed", "-".bright_black());
    }

    Ok(())
}

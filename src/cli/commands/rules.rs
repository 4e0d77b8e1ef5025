use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn handle(rule_file: Option<&PathBuf>) -> Result<()> {
    let rules = super::load_rules(rule_file)?;

    println!(
        "{} ({} rules, applied in order)",
        "Active rule set".bright_blue().bold(),
        rules.len()
    );
    println!();

    for (index, rule) in rules.iter().enumerate() {
        println!("{:>3}. {}", index, rule.pattern().bright_yellow());
        println!("     {} {}", "→".bright_cyan(), rule.replacement());
    }

    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use restyle::Restyle;

#[allow(clippy::fn_params_excessive_bools)]
pub fn handle(
    path: &PathBuf,
    rule_file: Option<&PathBuf>,
    dry_run: bool,
    parallel: bool,
    json: bool,
) -> Result<()> {
    let rules = super::load_rules(rule_file)?;
    let restyle = Restyle::new(path)?.with_rules(rules);

    if !json {
        println!("{}", "Starting bulk responsive update".bright_blue().bold());
        if dry_run {
            println!("{}", "(dry run: no files will be written)".bright_black());
        }
        println!("{}", "=".repeat(60).bright_blue());
    }

    let report = restyle.run(dry_run, parallel)?;

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "{} Found {} pages to update",
        "→".bright_cyan(),
        report.summary.files_discovered
    );
    println!();

    report.render_lines(&restyle.pages_root());
    report.render_summary();
    if !dry_run {
        report.render_next_steps(restyle.pages_dir());
    }

    Ok(())
}

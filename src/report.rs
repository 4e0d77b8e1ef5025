use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::process::FileOutcome;

/// Counters accumulated across one run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_discovered: usize,
    pub files_changed: usize,
    pub total_rules_fired: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_discovered += 1;
        match outcome {
            FileOutcome::Processed(record) => {
                if record.changed {
                    self.files_changed += 1;
                    self.total_rules_fired += record.rules_fired;
                }
            }
            FileOutcome::Failed { .. } => self.errors += 1,
        }
    }
}

/// Full result of one run: per-file outcomes in discovery order plus the
/// aggregate counters. Pure data; rendering lives below.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
    pub summary: RunSummary,
}

impl RunReport {
    /// Aggregate outcomes already sorted into discovery order.
    pub fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        let mut summary = RunSummary::default();
        for outcome in &outcomes {
            summary.record(outcome);
        }

        Self { outcomes, summary }
    }

    /// One console line per file: changed-with-count, unchanged, or errored.
    pub fn render_lines(&self, base: &Path) {
        for outcome in &self.outcomes {
            let shown = outcome
                .path()
                .strip_prefix(base)
                .unwrap_or(outcome.path())
                .display();

            match outcome {
                FileOutcome::Processed(record) if record.changed => {
                    let noun = if record.rules_fired == 1 {
                        "update"
                    } else {
                        "updates"
                    };
                    println!(
                        "{} {} ({} {})",
                        "✓".bright_green(),
                        shown,
                        record.rules_fired,
                        noun
                    );
                }
                FileOutcome::Processed(_) => {
                    println!("{} {} (no changes needed)", "-".bright_black(), shown);
                }
                FileOutcome::Failed { message, .. } => {
                    println!("{} {}: {}", "✗".bright_red(), shown, message.bright_red());
                }
            }
        }
    }

    pub fn render_summary(&self) {
        let s = &self.summary;

        println!();
        println!("{}", "=".repeat(60).bright_blue());
        println!(
            "  Updated: {}/{} files",
            s.files_changed.to_string().bright_green(),
            s.files_discovered
        );
        println!("  Total replacements: {}", s.total_rules_fired);
        if s.errors > 0 {
            println!(
                "  Errors: {}",
                s.errors.to_string().bright_red()
            );
        }
    }

    /// Afterword instructions, printed after a run that changed something.
    /// `pages_dir` is the configured pages directory, so the commit hint
    /// matches a redirected layout.
    pub fn render_next_steps(&self, pages_dir: &Path) {
        if self.summary.files_changed == 0 {
            return;
        }

        println!();
        println!("{}", "Next steps:".bright_cyan());
        println!("  1. Test locally: npm run dev");
        println!("  2. Check a few pages in the browser");
        println!("  3. Commit: git add {}", git_add_target(pages_dir));
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn git_add_target(pages_dir: &Path) -> String {
    format!("{}/", pages_dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::FileRecord;
    use std::path::PathBuf;

    fn processed(path: &str, changed: bool, rules_fired: usize) -> FileOutcome {
        FileOutcome::Processed(FileRecord {
            path: PathBuf::from(path),
            changed,
            rules_fired,
        })
    }

    #[test]
    fn test_summary_counters() {
        let report = RunReport::from_outcomes(vec![
            processed("pages/A.tsx", true, 5),
            processed("pages/B.tsx", false, 0),
            processed("pages/C.tsx", true, 2),
            FileOutcome::Failed {
                path: PathBuf::from("pages/D.tsx"),
                message: "permission denied".to_string(),
            },
        ]);

        assert_eq!(
            report.summary,
            RunSummary {
                files_discovered: 4,
                files_changed: 2,
                total_rules_fired: 7,
                errors: 1,
            }
        );
    }

    #[test]
    fn test_empty_run() {
        let report = RunReport::from_outcomes(Vec::new());
        assert_eq!(report.summary, RunSummary::default());
    }

    #[test]
    fn test_git_add_hint_follows_configured_pages_dir() {
        assert_eq!(git_add_target(Path::new("src/pages")), "src/pages/");
        assert_eq!(git_add_target(Path::new("app/screens")), "app/screens/");
    }

    #[test]
    fn test_json_shape() {
        let report = RunReport::from_outcomes(vec![processed("pages/A.tsx", true, 3)]);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["files_discovered"], 1);
        assert_eq!(value["summary"]["files_changed"], 1);
        assert_eq!(value["summary"]["total_rules_fired"], 3);
        assert_eq!(value["outcomes"][0]["outcome"], "processed");
        assert_eq!(value["outcomes"][0]["rules_fired"], 3);
    }
}

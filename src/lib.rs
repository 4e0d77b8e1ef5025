pub mod config;
pub mod engine;
pub mod error;
pub mod process;
pub mod report;
pub mod rules;
pub mod walker;

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level entry point: a project root, its run configuration, and the
/// RuleSet to apply.
#[derive(Debug, Clone)]
pub struct Restyle {
    project_root: PathBuf,
    config: config::Config,
    rules: rules::RuleSet,
}

impl Restyle {
    /// Load configuration for the project and use the built-in catalogue.
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref().to_path_buf();
        let config = config::Config::load_or_default(&project_root)?;

        Ok(Self {
            project_root,
            config,
            rules: rules::RuleSet::builtin().clone(),
        })
    }

    /// Swap in a custom RuleSet (already compiled, so pattern defects have
    /// surfaced before any file is touched).
    pub fn with_rules(mut self, rules: rules::RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &rules::RuleSet {
        &self.rules
    }

    pub fn pages_root(&self) -> PathBuf {
        self.config.pages_root(&self.project_root)
    }

    /// The configured pages directory, relative to the project root.
    pub fn pages_dir(&self) -> &Path {
        &self.config.pages_dir
    }

    /// Rewrite a block of text in memory, without touching any file.
    pub fn rewrite(&self, content: &str) -> engine::Rewrite {
        engine::apply(content, &self.rules)
    }

    /// Discover and process every candidate file, returning the full
    /// report. Per-file failures are carried in the report; only
    /// discovery failure is an error here.
    pub fn run(&self, dry_run: bool, parallel: bool) -> Result<report::RunReport> {
        let pages_root = self.pages_root();
        let files = walker::discover(
            &pages_root,
            &self.config.nested_dir,
            &self.config.extensions,
        )?;

        info!(
            files = files.len(),
            parallel,
            dry_run,
            "starting restyle run"
        );

        let outcomes = if parallel {
            // Indexed parallel collect preserves discovery order, so the
            // report renders identically to a sequential run.
            files
                .par_iter()
                .map(|path| process::process_file(path, &self.rules, dry_run))
                .collect()
        } else {
            files
                .iter()
                .map(|path| process::process_file(path, &self.rules, dry_run))
                .collect()
        };

        Ok(report::RunReport::from_outcomes(outcomes))
    }
}

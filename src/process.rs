use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::engine;
use crate::rules::RuleSet;

/// Outcome of processing one discovered file.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub changed: bool,
    pub rules_fired: usize,
}

/// Per-file result carried into the report. A `Failed` outcome never
/// aborts the run; it is counted and rendered alongside the others.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed(FileRecord),
    Failed { path: PathBuf, message: String },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Processed(record) => &record.path,
            FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Read the file, run the engine, and write back only when the text
/// changed. Any read, decode, or write failure becomes a `Failed`
/// outcome so the run continues with the next file.
pub fn process_file(path: &Path, rules: &RuleSet, dry_run: bool) -> FileOutcome {
    match try_process(path, rules, dry_run) {
        Ok(record) => FileOutcome::Processed(record),
        Err(e) => FileOutcome::Failed {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        },
    }
}

fn try_process(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<FileRecord> {
    // Whole-file read; pages are small. read_to_string also enforces the
    // UTF-8 requirement, so an encoding problem surfaces here.
    let original = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let rewrite = engine::apply(&original, rules);
    let changed = rewrite.text != original;

    if changed && !dry_run {
        write_atomic(path, rewrite.text.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    debug!(
        path = %path.display(),
        changed,
        rules_fired = rewrite.rules_fired,
        "processed file"
    );

    Ok(FileRecord {
        path: path.to_path_buf(),
        changed,
        rules_fired: rewrite.rules_fired,
    })
}

/// Write content to a temporary sibling file, then rename it over the
/// target. A killed run leaves the file either fully old or fully new.
/// The target keeps its original permission bits.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid file path"))?;

    let temp_name = format!(
        ".{}.tmp.{}",
        file_name.to_string_lossy(),
        std::process::id()
    );
    let temp_path = path.with_file_name(temp_name);

    let result = write_temp(path, &temp_path, content).and_then(|()| {
        fs::rename(&temp_path, path).context("Failed to atomically rename file")
    });

    if result.is_err() {
        // Don't leave the temp file behind in the pages directory.
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp(path: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content)
        .context("Failed to write to temporary file")?;

    temp_file
        .sync_all()
        .context("Failed to sync temporary file")?;

    // The rename replaces the target's inode, so carry the target's own
    // mode over to the temp file (0o600 stays 0o600, executable bits
    // survive).
    #[cfg(unix)]
    {
        let mode = fs::metadata(path)?.permissions().mode();
        fs::set_permissions(temp_path, fs::Permissions::from_mode(mode))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_rules() -> RuleSet {
        RuleSet::from_pairs(vec![("foo", "bar"), ("bar", "baz")]).unwrap()
    }

    #[test]
    fn test_changed_file_is_rewritten() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("page.tsx");
        fs::write(&file_path, "foo foo")?;

        let outcome = process_file(&file_path, &test_rules(), false);

        match outcome {
            FileOutcome::Processed(record) => {
                assert!(record.changed);
                assert_eq!(record.rules_fired, 2);
            }
            FileOutcome::Failed { message, .. } => panic!("unexpected failure: {}", message),
        }

        assert_eq!(fs::read_to_string(&file_path)?, "baz baz");
        Ok(())
    }

    #[test]
    fn test_unchanged_file_left_untouched() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("page.tsx");
        fs::write(&file_path, "nothing to do")?;
        let mtime_before = fs::metadata(&file_path)?.modified()?;

        let outcome = process_file(&file_path, &test_rules(), false);

        match outcome {
            FileOutcome::Processed(record) => {
                assert!(!record.changed);
                assert_eq!(record.rules_fired, 0);
            }
            FileOutcome::Failed { message, .. } => panic!("unexpected failure: {}", message),
        }

        assert_eq!(fs::read_to_string(&file_path)?, "nothing to do");
        assert_eq!(fs::metadata(&file_path)?.modified()?, mtime_before);
        Ok(())
    }

    #[test]
    fn test_dry_run_reports_without_writing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("page.tsx");
        fs::write(&file_path, "foo")?;

        let outcome = process_file(&file_path, &test_rules(), true);

        match outcome {
            FileOutcome::Processed(record) => {
                assert!(record.changed);
                assert_eq!(record.rules_fired, 2);
            }
            FileOutcome::Failed { message, .. } => panic!("unexpected failure: {}", message),
        }

        assert_eq!(fs::read_to_string(&file_path)?, "foo");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_a_per_file_failure() {
        let outcome = process_file(Path::new("/nonexistent/page.tsx"), &test_rules(), false);

        match outcome {
            FileOutcome::Failed { path, message } => {
                assert_eq!(path, Path::new("/nonexistent/page.tsx"));
                assert!(message.contains("Failed to read"));
            }
            FileOutcome::Processed(_) => panic!("expected a failure"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_preserves_file_mode() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("page.tsx");
        fs::write(&file_path, "foo")?;

        for mode in [0o600, 0o755] {
            fs::write(&file_path, "foo")?;
            fs::set_permissions(&file_path, fs::Permissions::from_mode(mode))?;

            let outcome = process_file(&file_path, &test_rules(), false);
            assert!(matches!(outcome, FileOutcome::Processed(_)));

            assert_eq!(fs::read_to_string(&file_path)?, "baz");
            let after = fs::metadata(&file_path)?.permissions().mode() & 0o777;
            assert_eq!(after, mode, "mode {:o} not preserved", mode);
        }

        Ok(())
    }

    #[test]
    fn test_no_temp_files_left_behind() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("page.tsx");
        fs::write(&file_path, "foo foo")?;

        process_file(&file_path, &test_rules(), false);
        process_file(&file_path, &test_rules(), true);

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);

        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_a_per_file_failure() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("binary.tsx");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x01])?;

        let outcome = process_file(&file_path, &test_rules(), false);
        assert!(matches!(outcome, FileOutcome::Failed { .. }));

        Ok(())
    }
}

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::DiscoveryError;

/// Enumerate candidate files from the pages root and its optional nested
/// subdirectory.
///
/// Neither root is recursed into beyond its own entries, so anything
/// deeper (or anywhere else) is never touched. The result is the
/// deduplicated union of both roots, sorted lexicographically by full
/// path so runs and reports are reproducible.
///
/// A missing pages root is fatal; a missing nested subdirectory just
/// contributes zero files.
pub fn discover(
    pages_dir: &Path,
    nested_dir: &str,
    extensions: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !pages_dir.is_dir() {
        return Err(DiscoveryError::MissingRoot {
            path: pages_dir.to_path_buf(),
        });
    }

    let mut files = BTreeSet::new();
    collect_root(pages_dir, extensions, &mut files)?;

    let nested = pages_dir.join(nested_dir);
    if nested.is_dir() {
        collect_root(&nested, extensions, &mut files)?;
    }

    debug!(count = files.len(), "discovered candidate files");
    Ok(files.into_iter().collect())
}

fn collect_root(
    root: &Path,
    extensions: &[String],
    files: &mut BTreeSet<PathBuf>,
) -> Result<(), DiscoveryError> {
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DiscoveryError::Unreadable {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if matches_extension(entry.path(), extensions) {
            files.insert(entry.path().to_path_buf());
        }
    }

    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|wanted| wanted == ext))
        .unwrap_or(false)
}

//! Recursive file enumeration with exclusion pruning.
//!
//! Traversal is depth-first with entries sorted by file name inside every
//! directory, so the same tree always yields the same sequence.
//!
//! Policies:
//! - excluded directories are pruned before they are opened
//! - the root itself is never pruned, whatever its name
//! - symlinked directories are not followed; symlinks to files, and dangling
//!   symlinks, are returned as files
//! - entries that cannot be read during descent are skipped (best-effort)

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::filter::FilterSet;
use crate::{HarvestError, Result};

/// Enumerate every non-excluded file under `root`.
///
/// Returned paths are `root` joined with the relative path of each file, in
/// traversal order.
///
/// # Errors
///
/// Returns `HarvestError::Traversal` if `root` does not exist or is not a
/// directory. Failures below the root never abort the walk.
pub fn walk(root: impl AsRef<Path>, filter: &FilterSet) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    validate_root(root)?;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned_dir(entry, filter));

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !is_file_like(&entry) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if filter.is_file_excluded(&name) {
            tracing::trace!("Excluded by file glob: {}", entry.path().display());
            continue;
        }

        files.push(entry.into_path());
    }

    tracing::debug!("Discovered {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

fn validate_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|e| {
        HarvestError::traversal_with_source(format!("Root directory does not exist: {}", root.display()), e)
    })?;

    if !metadata.is_dir() {
        return Err(HarvestError::traversal(format!(
            "Root path is not a directory: {}",
            root.display()
        )));
    }

    Ok(())
}

fn is_pruned_dir(entry: &DirEntry, filter: &FilterSet) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && filter.is_dir_excluded(&entry.file_name().to_string_lossy())
}

fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // A symlink is listed unless it resolves to a directory.
    file_type.is_symlink() && !entry.path().is_dir()
}

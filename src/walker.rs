//! Recursive discovery of chart files.

use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

/// Returns `true` when the file name ends with `extension`, ignoring case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .ends_with(&extension.to_lowercase())
        })
        .unwrap_or(false)
}

/// Collects every file below `root` whose name ends with `extension`.
///
/// Directories are visited depth first, entries sorted by name so the result
/// is stable between runs. Directories or entries that can't be read are
/// reported and skipped; the walk itself never fails. Symlinked directories
/// are neither followed nor returned, symlinked files are returned.
pub fn find_chart_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(root, extension, &mut found);
    found
}

fn walk(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut entries: Vec<_> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            // Linked directories are neither charts nor descended into.
            continue;
        } else if has_extension(&path, extension) {
            // Symlinks to files are followed, like any regular file.
            found.push(path);
        }
    }

    // Files of a directory come before the contents of its subdirectories.
    for subdir in subdirs {
        walk(&subdir, extension, found);
    }
}

//! Source tree scanning
//!
//! Collects the files a fixer should visit: every file under the configured
//! roots whose extension matches and whose name carries none of the
//! exclusion markers (`.spec.`, `.d.` by default).

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Collect matching files under `base`, sorted and de-duplicated
///
/// Missing roots are skipped. Symlinked directories are not followed.
pub fn collect_files(base: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let mut files = Vec::new();
    for root in &config.roots {
        let dir = base.join(root);
        if !dir.is_dir() {
            debug!("Skipping missing source root: {}", dir.display());
            continue;
        }
        walk(&dir, config, &mut files, true)?;
    }

    files.sort();
    files.dedup();
    debug!("Collected {} file(s) for scanning", files.len());
    Ok(files)
}

/// Whether a file name passes the extension and exclusion filters
pub fn matches(path: &Path, config: &ScanConfig) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    let extension_matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == config.extension);

    extension_matches && !config.exclude.iter().any(|marker| name.contains(marker.as_str()))
}

/// Walk `dir` recursively
///
/// Only a failure to list the root itself is an error. Unreadable
/// subdirectories and entries are logged and skipped.
fn walk(dir: &Path, config: &ScanConfig, files: &mut Vec<PathBuf>, is_root: bool) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if is_root => {
            return Err(Error::scan(format!("Cannot list {}: {}", dir.display(), e)));
        }
        Err(e) => {
            warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Ok(());
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            walk(&path, config, files, false)?;
        } else if file_type.is_symlink() {
            // Linked files are fixed in place; linked directories are not walked.
            if path.is_file() && matches(&path, config) {
                files.push(path);
            }
        } else if file_type.is_file() && matches(&path, config) {
            files.push(path);
        }
    }

    Ok(())
}

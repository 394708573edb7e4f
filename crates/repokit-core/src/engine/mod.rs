//! Fix engine
//!
//! The FixEngine is responsible for:
//! - Reading each scanned file
//! - Running one fixer over its content
//! - Rewriting the file when the fixer produced a change
//! - Collecting a per-file report
//!
//! ## Flow
//!
//! ```text
//! collect_files() ──► FixEngine::run() ──► for each file:
//!                                            read ──► Fixer::fix() ──► write
//!                                                          │
//!                                                          ▼
//!                                                     FileOutcome
//! ```
//!
//! Files are processed one at a time, in the order given. A file that cannot
//! be read or written is logged and reported as unchanged; the run never
//! aborts part-way through a tree.

use crate::traits::Fixer;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The fixer applied and the file was rewritten (or would be, in dry-run)
    Fixed {
        /// File path
        path: PathBuf,
        /// Lines removed from the file
        removed_lines: usize,
    },

    /// The heuristic did not apply; the file is byte-identical
    Unchanged {
        /// File path
        path: PathBuf,
    },

    /// Reading or writing failed; the file is reported as unchanged
    Skipped {
        /// File path
        path: PathBuf,
        /// Underlying error, for logs
        reason: String,
    },
}

impl FileOutcome {
    /// The file this outcome is about
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Fixed { path, .. }
            | FileOutcome::Unchanged { path }
            | FileOutcome::Skipped { path, .. } => path,
        }
    }

    /// Whether the file was changed
    pub fn is_fixed(&self) -> bool {
        matches!(self, FileOutcome::Fixed { .. })
    }
}

/// Summary of one fixer run over a file set
#[derive(Debug, Clone)]
pub struct FixReport {
    /// Fixer name
    pub fixer: &'static str,
    /// Fixer banner title
    pub title: &'static str,
    /// Whether files were left untouched on purpose
    pub dry_run: bool,
    /// One outcome per scanned file, in scan order
    pub outcomes: Vec<FileOutcome>,
}

impl FixReport {
    /// Number of files visited
    pub fn scanned(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files changed
    pub fn fixed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_fixed()).count()
    }

    /// Total lines removed across all files
    pub fn removed_lines(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                FileOutcome::Fixed { removed_lines, .. } => *removed_lines,
                _ => 0,
            })
            .sum()
    }

    /// Outcomes of the files that changed
    pub fn fixed_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_fixed())
    }
}

/// Runs a single fixer over a list of files
pub struct FixEngine {
    /// Heuristic to apply
    fixer: Arc<dyn Fixer>,

    /// Compute fixes without writing them
    dry_run: bool,
}

impl FixEngine {
    /// Create a new engine
    pub fn new(fixer: Arc<dyn Fixer>, dry_run: bool) -> Self {
        Self { fixer, dry_run }
    }

    /// Name of the fixer this engine runs
    pub fn fixer_name(&self) -> &'static str {
        self.fixer.name()
    }

    /// Apply the fixer to every file, in order
    pub fn run(&self, files: &[PathBuf]) -> FixReport {
        info!(
            "Running fixer '{}' over {} file(s) [mode: {}]",
            self.fixer.name(),
            files.len(),
            if self.dry_run { "DRY-RUN" } else { "LIVE" }
        );

        let outcomes = files.iter().map(|path| self.fix_file(path)).collect();

        FixReport {
            fixer: self.fixer.name(),
            title: self.fixer.title(),
            dry_run: self.dry_run,
            outcomes,
        }
    }

    /// Apply the fixer to one file
    pub fn fix_file(&self, path: &Path) -> FileOutcome {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return self.skipped(path, format!("read failed: {}", e)),
        };

        let Some(fix) = self.fixer.fix(&content) else {
            debug!("No change: {}", path.display());
            return FileOutcome::Unchanged {
                path: path.to_path_buf(),
            };
        };

        if fix.content == content {
            debug!("Fix is a no-op: {}", path.display());
            return FileOutcome::Unchanged {
                path: path.to_path_buf(),
            };
        }

        if self.dry_run {
            info!(
                "[DRY-RUN] Would remove {} line(s) from {}",
                fix.removed_lines,
                path.display()
            );
        } else {
            if let Err(e) = fs::write(path, &fix.content) {
                return self.skipped(path, format!("write failed: {}", e));
            }
            info!("Removed {} line(s) from {}", fix.removed_lines, path.display());
        }

        FileOutcome::Fixed {
            path: path.to_path_buf(),
            removed_lines: fix.removed_lines,
        }
    }

    fn skipped(&self, path: &Path, reason: String) -> FileOutcome {
        warn!(
            "Fixer '{}' skipped {}: {}",
            self.fixer.name(),
            path.display(),
            reason
        );
        FileOutcome::Skipped {
            path: path.to_path_buf(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixers::HalfFileFixer;
    use tempfile::tempdir;

    const DOUBLED: &str = "export enum A {\n  X,\n}\nexport enum A {\n  X,\n}\n";

    #[test]
    fn rewrites_fixed_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, DOUBLED).unwrap();

        let engine = FixEngine::new(Arc::new(HalfFileFixer), false);
        let report = engine.run(&[path.clone()]);

        assert_eq!(report.fixed(), 1);
        assert_eq!(report.removed_lines(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export enum A {\n  X,\n}\n");
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, DOUBLED).unwrap();

        let engine = FixEngine::new(Arc::new(HalfFileFixer), true);
        let report = engine.run(&[path.clone()]);

        assert_eq!(report.fixed(), 1);
        assert!(report.dry_run);
        assert_eq!(fs::read_to_string(&path).unwrap(), DOUBLED);
    }

    #[test]
    fn unreadable_file_is_reported_unchanged() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.ts");

        let engine = FixEngine::new(Arc::new(HalfFileFixer), false);
        let report = engine.run(&[missing]);

        assert_eq!(report.scanned(), 1);
        assert_eq!(report.fixed(), 0);
        assert!(matches!(report.outcomes[0], FileOutcome::Skipped { .. }));
    }

    #[test]
    fn non_utf8_file_is_skipped_and_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.ts");
        let bytes = vec![0xff, 0xfe, b'\n', 0xff, 0xfe, b'\n', 0xff, 0xfe, b'\n', 0xff, 0xfe, b'\n'];
        fs::write(&path, &bytes).unwrap();

        let engine = FixEngine::new(Arc::new(HalfFileFixer), false);
        let outcome = engine.fix_file(&path);

        assert!(matches!(outcome, FileOutcome::Skipped { .. }));
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }
}

//! Built-in duplicate-content fixers
//!
//! Each fixer is a single-pass text heuristic. They share nothing and can run
//! in any order, but [`crate::FixerRegistry::builtin`] registers them in the
//! order that gives the best results on a damaged tree: whole-file copies
//! first, then repeated blocks, then the finer-grained import cleanups.

mod duplicate_declarations;
mod half_file;
mod late_imports;
mod repeated_block;
mod trailing_imports;

pub use duplicate_declarations::{DuplicateDeclarationsFixer, declared_name, find_duplicate_start};
pub use half_file::{HalfFileFixer, find_half_duplicate};
pub use late_imports::{LateImportsFixer, find_late_import};
pub use repeated_block::{RepeatedBlockFixer, find_repeated_block};
pub use trailing_imports::{TrailingImportsFixer, last_root_brace};

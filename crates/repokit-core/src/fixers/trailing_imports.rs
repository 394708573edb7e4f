//! Orphaned imports after the last root-level declaration
//!
//! When a duplicated declaration is partially deleted, its import header is
//! often left dangling below the real code. This fixer tracks brace depth to
//! find where the last top-level block closes and drops everything after it,
//! but only when an import or re-export is found there.

use crate::text::{import_statement_lines, is_import, is_reexport, split_lines, truncate};
use crate::traits::{Fix, Fixer};

/// Removes imports that follow the last root-level closing brace
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingImportsFixer;

/// Index of the last line where brace depth returns to zero on a `}`
///
/// Blank lines and `//` comment lines are ignored. Lines of import and
/// re-export statements, including the `} from './x';` line closing a
/// multi-line one, still count toward depth but never mark the root brace
/// themselves, so `import { A } from './a';` below the code does not hide
/// itself. Braces
/// inside strings are counted like any other; the heuristic does not parse.
pub fn last_root_brace(lines: &[&str]) -> Option<usize> {
    let in_import = import_statement_lines(lines);
    let mut depth: i64 = 0;
    let mut last = None;

    for (index, line) in lines.iter().enumerate() {
        let stripped = line.trim_start();
        if stripped.is_empty() || stripped.starts_with("//") {
            continue;
        }

        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        depth += opens - closes;

        if depth == 0 && line.contains('}') && !in_import[index] {
            last = Some(index);
        }
    }

    last
}

impl Fixer for TrailingImportsFixer {
    fn name(&self) -> &'static str {
        "trailing-imports"
    }

    fn title(&self) -> &'static str {
        "Removing Trailing Duplicate Imports"
    }

    fn fix(&self, content: &str) -> Option<Fix> {
        let lines = split_lines(content);
        let brace = last_root_brace(&lines)?;

        let has_trailing_imports = lines[brace + 1..]
            .iter()
            .any(|line| is_import(line) || is_reexport(line));
        if !has_trailing_imports {
            return None;
        }

        let (content, removed) = truncate(&lines, brace + 1);
        Some(Fix::new(content, removed))
    }
}

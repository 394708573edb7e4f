//! Import blocks that appear after the main code body

use crate::text::{import_statement_lines, is_import_from, split_lines, truncate};
use crate::traits::{Fix, Fixer};

/// Cuts a file at the first `import ... from ...` below its last closing brace
#[derive(Debug, Clone, Copy, Default)]
pub struct LateImportsFixer;

/// Line of the first late import, if any
///
/// The closing brace must belong to code: a `} from '...';` line that ends a
/// multi-line import is not a candidate.
pub fn find_late_import(lines: &[&str]) -> Option<usize> {
    let in_import = import_statement_lines(lines);
    let last_brace = lines
        .iter()
        .enumerate()
        .rposition(|(index, line)| line.trim().starts_with('}') && !in_import[index])?;

    (last_brace + 1..lines.len()).find(|&index| is_import_from(lines[index]))
}

impl Fixer for LateImportsFixer {
    fn name(&self) -> &'static str {
        "late-imports"
    }

    fn title(&self) -> &'static str {
        "Removing Late Duplicate Imports"
    }

    fn fix(&self, content: &str) -> Option<Fix> {
        let lines = split_lines(content);
        let start = find_late_import(&lines)?;
        let (content, removed) = truncate(&lines, start);
        Some(Fix::new(content, removed))
    }
}

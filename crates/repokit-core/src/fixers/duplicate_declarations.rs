//! Duplicate exported declarations
//!
//! A pasted copy of a module usually shows up as the same
//! `export class|interface|enum Name` appearing twice, with the copy's import
//! header just above the second occurrence. Everything from that header on is
//! dropped.

use crate::text::{is_import, split_lines, truncate};
use crate::traits::{Fix, Fixer};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// How far above the duplicate declaration to look for its import header
const IMPORT_LOOKBACK: usize = 19;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export (class|interface|enum) (\w+)").expect("declaration pattern is valid")
});

/// Truncates a file at the second declaration of an exported name
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateDeclarationsFixer;

/// Name declared on this line, if it is an exported class, interface or enum
pub fn declared_name(line: &str) -> Option<&str> {
    DECLARATION
        .captures(line.trim())
        .and_then(|caps| caps.get(2))
        .map(|name| name.as_str())
}

/// Line where the duplicated copy starts
///
/// Returns the first line of the import run directly above the second
/// declaration (searched within [`IMPORT_LOOKBACK`] lines and never at or
/// above the first declaration), or the declaration line itself when there
/// is no such import.
pub fn find_duplicate_start(lines: &[&str]) -> Option<usize> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(name) = declared_name(line) else {
            continue;
        };

        let Some(&first) = seen.get(name) else {
            seen.insert(name, index);
            continue;
        };

        let floor = (first + 1).max(index.saturating_sub(IMPORT_LOOKBACK));
        let start = match (floor..index).rev().find(|&j| is_import(lines[j])) {
            Some(mut j) => {
                while j > floor && is_import(lines[j - 1]) {
                    j -= 1;
                }
                j
            }
            None => index,
        };

        return (start > 0).then_some(start);
    }

    None
}

impl Fixer for DuplicateDeclarationsFixer {
    fn name(&self) -> &'static str {
        "duplicate-declarations"
    }

    fn title(&self) -> &'static str {
        "Fixing Duplicate Code"
    }

    fn fix(&self, content: &str) -> Option<Fix> {
        let lines = split_lines(content);
        let start = find_duplicate_start(&lines)?;
        let (content, removed) = truncate(&lines, start);
        Some(Fix::new(content, removed))
    }
}

//! Line helpers shared by the fixers
//!
//! Files are read as whole strings and compared line by line. Line endings
//! are normalized to `\n` whenever a file is rewritten.

/// Split content into lines, tolerating `\r\n` endings
///
/// A final newline does not produce an empty trailing line.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// Join lines with `\n`, ending with exactly one newline
pub fn join_lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Drop trailing whitespace-only lines
pub fn trim_trailing_blank<'a>(mut lines: Vec<&'a str>) -> Vec<&'a str> {
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Empty or whitespace-only line
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// `import ...` statement
pub fn is_import(line: &str) -> bool {
    line.trim().starts_with("import ")
}

/// `import ... from ...` statement
pub fn is_import_from(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("import ") && trimmed.contains(" from ")
}

/// `export ... from ...` re-export
pub fn is_reexport(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("export ") && trimmed.contains(" from ")
}

/// Net brace count of a line
fn brace_delta(line: &str) -> i64 {
    line.matches('{').count() as i64 - line.matches('}').count() as i64
}

/// Mark every line that belongs to an import or re-export statement
///
/// Multi-line statements are followed until their braces balance, so the
/// `} from './x';` line closing an `import {` block is marked too.
pub fn import_statement_lines(lines: &[&str]) -> Vec<bool> {
    let mut marked = vec![false; lines.len()];
    let mut open: i64 = 0;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if open > 0 {
            marked[index] = true;
            open = (open + brace_delta(trimmed)).max(0);
            continue;
        }

        let starts_statement = is_import(trimmed)
            || is_reexport(trimmed)
            || trimmed.starts_with("export {")
            || trimmed.starts_with("export type {");
        if starts_statement {
            marked[index] = true;
            open = brace_delta(trimmed).max(0);
        }
    }

    marked
}

/// Truncate `lines` to `keep`, trim trailing blanks, and render the result
///
/// Returns the new content and how many lines were removed.
pub fn truncate(lines: &[&str], keep: usize) -> (String, usize) {
    let kept = trim_trailing_blank(lines[..keep.min(lines.len())].to_vec());
    let removed = lines.len() - kept.len();
    (join_lines(&kept), removed)
}

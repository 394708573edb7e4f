//! Repeated block removal
//!
//! Catches files where a copy/merge accident pasted the file's own head
//! again after it: `A ++ A`, or `A ++ A ++ tail`.

use crate::text::{is_blank, split_lines, truncate};
use crate::traits::{Fix, Fixer};

/// Files shorter than this are never touched
const MIN_LINES: usize = 4;

/// Smallest prefix considered a block
const MIN_BLOCK: usize = 2;

/// Truncates a file at the point where its content starts repeating its prefix
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedBlockFixer;

/// Find the split point where the remainder repeats the prefix
///
/// The largest qualifying split wins, so `A ++ A` splits at `len(A)` even
/// when `A` itself begins with a repeated pair of lines. Prefixes made only of
/// blank lines never qualify.
pub fn find_repeated_block(lines: &[&str]) -> Option<usize> {
    if lines.len() < MIN_LINES {
        return None;
    }

    (MIN_BLOCK..=lines.len() / 2).rev().find(|&split| {
        let prefix = &lines[..split];
        lines[split..].starts_with(prefix) && prefix.iter().any(|line| !is_blank(line))
    })
}

impl Fixer for RepeatedBlockFixer {
    fn name(&self) -> &'static str {
        "repeated-block"
    }

    fn title(&self) -> &'static str {
        "COMPREHENSIVE Duplicate Removal"
    }

    fn fix(&self, content: &str) -> Option<Fix> {
        let lines = split_lines(content);
        let split = find_repeated_block(&lines)?;
        let (content, removed) = truncate(&lines, split);
        Some(Fix::new(content, removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = "import { Injectable } from '@nestjs/common';\n\
\n\
@Injectable()\n\
export class QuizService {\n\
  score(): number {\n\
    return 1;\n\
  }\n\
}\n";

    #[test]
    fn doubled_file_keeps_one_copy() {
        let doubled = format!("{SERVICE}{SERVICE}");
        let fix = RepeatedBlockFixer.fix(&doubled).unwrap();
        assert_eq!(fix.content, SERVICE);
        assert_eq!(fix.removed_lines, 8);
    }

    #[test]
    fn doubled_file_with_internal_repetition() {
        // The block starts with a repeated pair; the whole block must survive.
        let block = "a\nb\na\nb\nc\n";
        let fix = RepeatedBlockFixer.fix(&format!("{block}{block}")).unwrap();
        assert_eq!(fix.content, block);
    }

    #[test]
    fn trailing_blank_lines_are_dropped() {
        let block = "export const A = 1;\nexport const B = 2;\n\n";
        let fix = RepeatedBlockFixer.fix(&format!("{block}{block}")).unwrap();
        assert_eq!(fix.content, "export const A = 1;\nexport const B = 2;\n");
    }

    #[test]
    fn repeated_prefix_followed_by_tail() {
        let content = "x\ny\nx\ny\nz\n";
        let fix = RepeatedBlockFixer.fix(content).unwrap();
        assert_eq!(fix.content, "x\ny\n");
        assert_eq!(fix.removed_lines, 3);
    }

    #[test]
    fn unique_file_is_untouched() {
        assert!(RepeatedBlockFixer.fix(SERVICE).is_none());
    }

    #[test]
    fn short_file_is_untouched() {
        assert!(RepeatedBlockFixer.fix("a\na\na\n").is_none());
    }

    #[test]
    fn blank_prefix_never_qualifies() {
        let content = "\n\n\n\nexport const A = 1;\n";
        assert!(RepeatedBlockFixer.fix(content).is_none());
    }

    #[test]
    fn concatenated_lines_do_not_match_across_boundaries() {
        // "a" + "b" equals "ab" as text, but not as lines.
        let content = "a\nb\nab\nc\n";
        assert!(RepeatedBlockFixer.fix(content).is_none());
    }
}

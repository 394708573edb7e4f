//! Whole-file duplication
//!
//! Detects files whose first half equals their second half, tolerating up to
//! two extra blank lines at the end, and keeps the first half.

use crate::text::{is_blank, join_lines, split_lines};
use crate::traits::{Fix, Fixer};

/// Files shorter than this are too small to carry a meaningful duplicate
const MIN_LINES: usize = 4;

/// Misalignment tolerated at the end of the file
const OFFSETS: [usize; 3] = [0, 1, 2];

/// Keeps the first half of files that are their own content twice
#[derive(Debug, Clone, Copy, Default)]
pub struct HalfFileFixer;

/// Length of the first half when the file is a doubled copy of it
///
/// For each offset, `mid = (total - offset) / 2` and the file qualifies when
/// `lines[..mid] == lines[mid..2 * mid]`, the half holds real content, and the
/// leftover lines past `2 * mid` are blank.
pub fn find_half_duplicate(lines: &[&str]) -> Option<usize> {
    let total = lines.len();
    if total < MIN_LINES {
        return None;
    }

    OFFSETS.iter().find_map(|&offset| {
        if total <= offset * 2 {
            return None;
        }

        let mid = (total - offset) / 2;
        let (first, rest) = lines.split_at(mid);

        let halves_match = first == &rest[..mid];
        let has_content = first.iter().any(|line| !is_blank(line));
        let leftover_blank = lines[mid * 2..].iter().all(|line| is_blank(line));

        (halves_match && has_content && leftover_blank).then_some(mid)
    })
}

impl Fixer for HalfFileFixer {
    fn name(&self) -> &'static str {
        "half-file"
    }

    fn title(&self) -> &'static str {
        "Removing Half-File Duplicates"
    }

    fn fix(&self, content: &str) -> Option<Fix> {
        let lines = split_lines(content);
        let mid = find_half_duplicate(&lines)?;
        Some(Fix::new(join_lines(&lines[..mid]), lines.len() - mid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DTO: &str = "export class CreateQuizDto {\n  title: string;\n  questions: string[];\n}\n";

    #[test]
    fn even_split() {
        let fix = HalfFileFixer.fix(&format!("{DTO}{DTO}")).unwrap();
        assert_eq!(fix.content, DTO);
        assert_eq!(fix.removed_lines, 4);
    }

    #[test]
    fn tolerates_trailing_blank_lines() {
        let fix = HalfFileFixer.fix(&format!("{DTO}{DTO}\n\n")).unwrap();
        assert_eq!(fix.content, DTO);
        assert_eq!(fix.removed_lines, 6);
    }

    #[test]
    fn missing_final_newline_still_matches() {
        let doubled = format!("{DTO}{}", DTO.trim_end());
        let fix = HalfFileFixer.fix(&doubled).unwrap();
        assert_eq!(fix.content, DTO);
    }

    #[test]
    fn extra_code_after_second_half_is_not_a_duplicate() {
        let content = format!("{DTO}{DTO}export const X = 1;\n");
        assert!(HalfFileFixer.fix(&content).is_none());
    }

    #[test]
    fn repeated_first_lines_are_not_a_duplicate() {
        // With offset 2, mid is 1: lines 0 and 1 match but the leftover is code.
        let content = "}\n}\nexport const A = 1;\nexport const B = 2;\nexport const C = 3;\n";
        assert!(HalfFileFixer.fix(content).is_none());
    }

    #[test]
    fn blank_halves_are_ignored() {
        assert!(HalfFileFixer.fix("\n\n\n\n").is_none());
    }

    #[test]
    fn small_files_are_ignored() {
        assert!(HalfFileFixer.fix("a\na\n").is_none());
    }

    #[test]
    fn unique_file_is_untouched() {
        assert!(HalfFileFixer.fix(DTO).is_none());
    }

    #[test]
    fn reports_half_length() {
        let lines = ["a", "b", "a", "b", ""];
        assert_eq!(find_half_duplicate(&lines), Some(2));
    }
}

//! Contract Test: No False Positives
//!
//! Every fixer must leave files without duplicated content byte-identical.
//!
//! Constraints verified:
//! - `Fixer::fix` returns `None` for clean content
//! - `FixEngine` never rewrites a file it did not fix
//! - mtime-free check: file bytes are compared before and after
//!
//! If this test fails, a heuristic is destroying valid code.

mod common;

use common::*;
use repokit_core::scan::collect_files;
use repokit_core::{FixEngine, FixerRegistry, ScanConfig};

#[test]
fn fixers_ignore_clean_content() {
    let registry = FixerRegistry::builtin();

    for fixer in registry.iter() {
        for (name, content) in clean_fixtures() {
            assert!(
                fixer.fix(content).is_none(),
                "fixer '{}' changed clean fixture {}",
                fixer.name(),
                name
            );
        }
    }
}

#[test]
fn clean_tree_is_byte_identical_after_all_fixers() {
    let tree = SourceTree::new();
    let mut written = Vec::new();
    for (name, content) in clean_fixtures() {
        let relative = format!("apps/api/src/questionnaire/{}", name);
        tree.write(&relative, content);
        written.push((relative, content));
    }

    let files = collect_files(tree.root(), &ScanConfig::default()).unwrap();
    assert_eq!(files.len(), written.len());

    for fixer in FixerRegistry::builtin().iter() {
        let report = FixEngine::new(fixer.clone(), false).run(&files);
        assert_eq!(report.fixed(), 0, "fixer '{}' fixed a clean file", fixer.name());
        assert_eq!(report.removed_lines(), 0);
    }

    for (relative, content) in written {
        assert_eq!(tree.read(&relative), content, "{} was modified", relative);
    }
}

#[test]
fn crlf_file_without_duplicates_keeps_its_line_endings() {
    let tree = SourceTree::new();
    let content = CLEAN_SERVICE.replace('\n', "\r\n");
    let path = tree.write("libs/shared/questionnaire.service.ts", &content);

    for fixer in FixerRegistry::builtin().iter() {
        FixEngine::new(fixer.clone(), false).fix_file(&path);
    }

    assert_eq!(tree.read("libs/shared/questionnaire.service.ts"), content);
}

// # Fixer Trait
//
// Defines the interface for duplicate-content heuristics.
//
// ## Implementations
//
// - `RepeatedBlockFixer`: file content repeats its own prefix
// - `TrailingImportsFixer`: imports after the last root-level brace
// - `HalfFileFixer`: first half of the file equals the second half
// - `DuplicateDeclarationsFixer`: the same exported type declared twice
// - `LateImportsFixer`: an import block after the last closing brace
//
// ## Usage
//
// ```rust
// use repokit_core::fixers::HalfFileFixer;
// use repokit_core::Fixer;
//
// let fixer = HalfFileFixer;
// let fix = fixer.fix("a\nb\nc\nd\na\nb\nc\nd\n").unwrap();
// assert_eq!(fix.content, "a\nb\nc\nd\n");
// ```

/// A rewrite produced by a fixer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    /// The full replacement content
    pub content: String,
    /// Number of lines dropped from the input
    pub removed_lines: usize,
}

impl Fix {
    /// Create a new fix
    pub fn new(content: impl Into<String>, removed_lines: usize) -> Self {
        Self {
            content: content.into(),
            removed_lines,
        }
    }
}

/// Trait for duplicate-content heuristics
///
/// A fixer is a pure function over file content. It never touches the
/// filesystem; reading and rewriting files is owned by `FixEngine`.
///
/// Returning `None` means the file must be left byte-identical.
pub trait Fixer: Send + Sync {
    /// Short, stable name used on the command line (e.g. "half-file")
    fn name(&self) -> &'static str;

    /// Human-readable banner title
    fn title(&self) -> &'static str;

    /// Compute the fix for a file's content, if the heuristic applies
    fn fix(&self, content: &str) -> Option<Fix>;
}

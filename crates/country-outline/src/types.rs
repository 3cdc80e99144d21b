//! Core data types for extracted headings and outlines.

use serde::{Deserialize, Serialize};

/// A single extracted heading. Flat — nesting is implied purely by `level`
/// and rendered via repeated `#` markers, never reconstructed as a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingNode {
    /// Semantic heading depth, 1 (top) through 6 (deepest).
    pub level: u8,
    /// Cleaned display text, edit-link artifacts removed.
    pub text: String,
}

impl HeadingNode {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Render as a single Markdown line: `#` repeated `level` times, a
    /// space, then the text.
    pub fn to_markdown_line(&self) -> String {
        format!("{} {}", "#".repeat(self.level as usize), self.text)
    }
}

/// An ordered sequence of headings, insertion order = document order.
///
/// The sequence always starts with a synthetic level-2 `Contents` entry,
/// followed by the level-1 page title when one is present. That 2-before-1
/// ordering mirrors how the source page renders and is intentional — it is
/// never sorted or re-nested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outline {
    headings: Vec<HeadingNode>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, heading: HeadingNode) {
        self.headings.push(heading);
    }

    pub fn headings(&self) -> &[HeadingNode] {
        &self.headings
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Render the outline as a single text block, one heading per line,
    /// separated by single newlines with no leading or trailing blanks.
    pub fn to_markdown(&self) -> String {
        self.headings
            .iter()
            .map(HeadingNode::to_markdown_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Errors that can occur while resolving, fetching, or extracting an outline.
#[derive(thiserror::Error, Debug)]
pub enum OutlineError {
    /// The remote article does not exist (remote 404). Carries the
    /// requested country name.
    #[error("Wikipedia page for '{0}' not found")]
    NotFound(String),

    /// Transport failure or non-404 remote error.
    #[error("failed to fetch data from Wikipedia: {0}")]
    FetchFailed(String),

    /// The document parsed but has no `mw-content-text` element — it is
    /// structurally not a Wikipedia article page.
    #[error("could not find the main content area of the Wikipedia page")]
    ContentRegionMissing,

    /// Any other failure during parsing or extraction.
    #[error("an unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Convenience result type.
pub type OutlineResult<T> = Result<T, OutlineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_line_repeats_marker_per_level() {
        assert_eq!(HeadingNode::new(1, "Vanuatu").to_markdown_line(), "# Vanuatu");
        assert_eq!(
            HeadingNode::new(6, "Deepest").to_markdown_line(),
            "###### Deepest"
        );
    }

    #[test]
    fn test_outline_renders_in_insertion_order() {
        let mut outline = Outline::new();
        outline.push(HeadingNode::new(2, "Contents"));
        outline.push(HeadingNode::new(1, "Vanuatu"));
        outline.push(HeadingNode::new(2, "Etymology"));

        // The 2-before-1 start is preserved, never level-sorted.
        assert_eq!(outline.to_markdown(), "## Contents\n# Vanuatu\n## Etymology");
    }

    #[test]
    fn test_empty_outline_renders_empty() {
        assert_eq!(Outline::new().to_markdown(), "");
        assert!(Outline::new().is_empty());
    }
}

//! Literal term search and match highlighting.

pub mod highlight;
pub mod indexer;

pub use highlight::{ClassificationTag, HighlightSpan, HighlightTracker};
pub use indexer::SearchIndexer;

use crate::kernel::span::Span;

/// One occurrence of the term. Never crosses a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Match {
    pub fn new(start: usize, end: usize, line: usize, col: usize) -> Self {
        debug_assert!(start < end, "empty match at {start}");
        Self {
            start,
            end,
            line,
            col,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    pub text: String,
    pub case_sensitive: bool,
}

impl SearchTerm {
    pub fn new(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            text: text.into(),
            case_sensitive,
        }
    }

    /// Empty text is the inactive term.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

//! Fold regions between matches.

pub mod builder;
pub mod tracker;

pub use builder::FoldRegionBuilder;
pub use tracker::FoldRegionTracker;

use crate::kernel::span::Span;
use crate::models::Snapshot;

/// A collapsible line range. Always spans at least two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldRegion {
    pub level: u32,
    pub start_line: usize,
    pub start_offset: usize,
    pub end_line: usize,
}

impl FoldRegion {
    /// Shown in place of the hidden lines.
    pub const COLLAPSED_TEXT: &'static str = "...";
    pub const HOVER_TEXT: &'static str = "lines hidden between matches";

    pub fn new(start_line: usize, end_line: usize) -> Self {
        assert!(
            end_line > start_line,
            "fold region {start_line}..={end_line} spans fewer than two lines"
        );
        Self {
            level: 1,
            start_line,
            start_offset: 0,
            end_line,
        }
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// From `start_offset` into the first line to the end of the last line,
    /// line break excluded.
    pub fn extent(&self, snapshot: &Snapshot) -> Span {
        let start = snapshot.line_start(self.start_line) + self.start_offset;
        let end = snapshot.line_end(self.end_line);
        Span::new(start, end)
    }

    pub fn intersects_lines(&self, first_line: usize, last_line: usize) -> bool {
        self.start_line <= last_line && self.end_line >= first_line
    }
}

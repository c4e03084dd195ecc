use crate::kernel::span::Span;
use crate::models::{Snapshot, TextBuffer, Tracking};
use std::cell::RefCell;

/// Versioned text source a controller reads from. Supplied by the host.
pub trait SnapshotProvider {
    fn current_snapshot(&self) -> Snapshot;

    /// Maps `position` from `from_version` forward to `to_version`.
    fn translate(
        &self,
        position: usize,
        from_version: u64,
        to_version: u64,
        tracking: Tracking,
    ) -> usize;

    /// Edge-exclusive span tracking: insertions at either edge stay outside the span.
    fn translate_span(&self, span: Span, from_version: u64, to_version: u64) -> Span {
        if from_version == to_version {
            return span;
        }
        let start = self.translate(span.start, from_version, to_version, Tracking::Positive);
        let end = self.translate(span.end, from_version, to_version, Tracking::Negative);
        Span::new(start, end.max(start))
    }
}

impl SnapshotProvider for TextBuffer {
    fn current_snapshot(&self) -> Snapshot {
        self.snapshot()
    }

    fn translate(
        &self,
        position: usize,
        from_version: u64,
        to_version: u64,
        tracking: Tracking,
    ) -> usize {
        TextBuffer::translate(self, position, from_version, to_version, tracking)
    }
}

/// Shared single-threaded buffer: the host edits it while a controller reads it.
impl SnapshotProvider for RefCell<TextBuffer> {
    fn current_snapshot(&self) -> Snapshot {
        self.borrow().snapshot()
    }

    fn translate(
        &self,
        position: usize,
        from_version: u64,
        to_version: u64,
        tracking: Tracking,
    ) -> usize {
        self.borrow()
            .translate(position, from_version, to_version, tracking)
    }
}

/// Caret with an optional selection, as char offsets into the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub position: usize,
    pub selection: Option<Span>,
}

impl Caret {
    pub fn at(position: usize) -> Self {
        Self {
            position,
            selection: None,
        }
    }

    /// Start of a non-empty selection, else the caret itself.
    pub fn anchor(&self) -> usize {
        match self.selection {
            Some(selection) if !selection.is_empty() => selection.start,
            _ => self.position,
        }
    }
}

pub trait WordResolver {
    /// The significant word under the caret, if there is one.
    fn word_at(&self, snapshot: &Snapshot, caret: &Caret) -> Option<String>;
}

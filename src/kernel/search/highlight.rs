use super::Match;
use crate::kernel::notify::{ChangeListener, ChangeNotification};
use crate::kernel::services::ports::SnapshotProvider;
use crate::kernel::span::{NormalizedSpans, Span};
use crate::kernel::tracker::DiffTracker;
use crate::models::Snapshot;

/// Classification a host maps to its match style. Opaque to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassificationTag(&'static str);

impl ClassificationTag {
    pub const SEARCH_MATCH: ClassificationTag = ClassificationTag("litesearch.match");

    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Default for ClassificationTag {
    fn default() -> Self {
        Self::SEARCH_MATCH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub span: Span,
    pub tag: ClassificationTag,
}

#[derive(Debug)]
pub struct HighlightTracker {
    tag: ClassificationTag,
    spans: Vec<HighlightSpan>,
    diff: DiffTracker,
}

impl HighlightTracker {
    pub fn new(tag: ClassificationTag) -> Self {
        Self {
            tag,
            spans: Vec::new(),
            diff: DiffTracker::new("highlight"),
        }
    }

    pub fn tag(&self) -> ClassificationTag {
        self.tag
    }

    /// Spans of the latest generation, in match order.
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Version the held spans are expressed in.
    pub fn snapshot_version(&self) -> Option<u64> {
        self.diff.snapshot_version()
    }

    /// Held spans touching `range`.
    pub fn spans_intersecting(&self, range: Span) -> impl Iterator<Item = &HighlightSpan> + '_ {
        self.spans
            .iter()
            .filter(move |span| span.span.intersects(&range))
    }

    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.diff.set_listener(listener);
    }

    pub fn clear_listener(&mut self) {
        self.diff.clear_listener();
    }

    /// Replaces the held spans with one span per match. No matches clears every
    /// highlight, invalidating the whole snapshot.
    pub fn update(
        &mut self,
        matches: &[Match],
        snapshot: &Snapshot,
        provider: &dyn SnapshotProvider,
    ) -> Option<ChangeNotification> {
        let spans: Vec<HighlightSpan> = matches
            .iter()
            .map(|m| HighlightSpan {
                span: m.span(),
                tag: self.tag,
            })
            .collect();
        let current: NormalizedSpans = spans.iter().map(|s| s.span).collect();

        let notification = self
            .diff
            .advance(current, snapshot, provider, matches.is_empty());
        self.spans = spans;
        notification
    }
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new(ClassificationTag::default())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/search/highlight.rs"]
mod tests;

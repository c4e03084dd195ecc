use super::*;
use crate::kernel::search::SearchIndexer;
use crate::models::TextBuffer;

fn update(tracker: &mut HighlightTracker, buffer: &TextBuffer, term: &str) -> Option<Span> {
    let snapshot = buffer.snapshot();
    let matches = SearchIndexer::scan(&snapshot, term, true);
    tracker
        .update(&matches, &snapshot, buffer)
        .map(|n| n.invalidated)
}

#[test]
fn test_spans_follow_matches() {
    let buffer = TextBuffer::from_text("foo bar foo");
    let mut tracker = HighlightTracker::default();

    assert_eq!(update(&mut tracker, &buffer, "foo"), Some(Span::new(0, 11)));
    assert_eq!(
        tracker.spans(),
        &[
            HighlightSpan {
                span: Span::new(0, 3),
                tag: ClassificationTag::SEARCH_MATCH,
            },
            HighlightSpan {
                span: Span::new(8, 11),
                tag: ClassificationTag::SEARCH_MATCH,
            },
        ]
    );
}

#[test]
fn test_changed_term_invalidates_union_of_changes() {
    let buffer = TextBuffer::from_text("foo bar baz\nbar");
    let mut tracker = HighlightTracker::default();

    update(&mut tracker, &buffer, "foo");
    // removed 0..3, added 4..7 and 12..15
    assert_eq!(update(&mut tracker, &buffer, "bar"), Some(Span::new(0, 15)));
}

#[test]
fn test_same_term_twice_is_suppressed() {
    let buffer = TextBuffer::from_text("foo bar foo");
    let mut tracker = HighlightTracker::default();

    update(&mut tracker, &buffer, "foo");
    assert_eq!(update(&mut tracker, &buffer, "foo"), None);
}

#[test]
fn test_clearing_invalidates_whole_snapshot() {
    let buffer = TextBuffer::from_text("one foo two\nthree");
    let mut tracker = HighlightTracker::default();

    update(&mut tracker, &buffer, "foo");
    assert_eq!(update(&mut tracker, &buffer, ""), Some(Span::new(0, 17)));
    assert!(tracker.spans().is_empty());
}

#[test]
fn test_rescan_after_edit_compares_translated_spans() {
    let mut buffer = TextBuffer::from_text("foo\nbar\nfoo");
    let mut tracker = HighlightTracker::default();
    update(&mut tracker, &buffer, "foo");

    buffer.insert(0, "inserted line\n");
    assert_eq!(update(&mut tracker, &buffer, "foo"), None);
    assert_eq!(tracker.snapshot_version(), Some(1));
    assert_eq!(tracker.spans()[0].span, Span::new(14, 17));
}

#[test]
fn test_spans_intersecting() {
    let buffer = TextBuffer::from_text("foo bar foo bar foo");
    let mut tracker = HighlightTracker::new(ClassificationTag::new("custom"));
    update(&mut tracker, &buffer, "foo");

    let hits: Vec<Span> = tracker
        .spans_intersecting(Span::new(5, 12))
        .map(|s| s.span)
        .collect();
    assert_eq!(hits, vec![Span::new(8, 11)]);
    assert_eq!(tracker.tag().name(), "custom");
}

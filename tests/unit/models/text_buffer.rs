use super::*;

#[test]
fn test_text_buffer_basic() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.len_chars(), 11);
    assert_eq!(buffer.version(), 0);
    assert!(buffer.history().is_empty());
}

#[test]
fn test_edits_bump_version() {
    let mut buffer = TextBuffer::from_text("hello");

    assert_eq!(buffer.insert(5, " world"), 1);
    assert_eq!(buffer.delete(0..1), 2);
    assert_eq!(buffer.version(), 2);
    assert_eq!(buffer.rope().to_string(), "ello world");
    assert_eq!(buffer.history().len(), 2);
    assert_eq!(buffer.history()[1].version, 2);
}

#[test]
fn test_snapshot_is_immutable_after_edit() {
    let mut buffer = TextBuffer::from_text("abc");
    let before = buffer.snapshot();

    buffer.insert(0, "xyz\n");
    let after = buffer.snapshot();

    assert_eq!(before.version(), 0);
    assert_eq!(before.line_text(0), "abc");
    assert_eq!(after.version(), 1);
    assert_eq!(after.line_text(1), "abc");
}

#[test]
fn test_translate_across_versions() {
    let mut buffer = TextBuffer::from_text("foo\nbar\n");
    buffer.insert(0, "new line\n");
    buffer.delete(0..4);

    // "bar" starts at 4 in version 0
    assert_eq!(buffer.translate(4, 0, 1, Tracking::Positive), 13);
    assert_eq!(buffer.translate(4, 0, 2, Tracking::Positive), 9);
    assert_eq!(buffer.translate(13, 1, 2, Tracking::Negative), 9);
    assert_eq!(buffer.translate(7, 2, 2, Tracking::Negative), 7);
}

#[test]
#[should_panic]
fn test_translate_backwards_panics() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.insert(0, "x");
    buffer.translate(0, 1, 0, Tracking::Positive);
}

#[test]
fn test_delete_records_removed_text() {
    let mut buffer = TextBuffer::from_text("one two");
    buffer.delete(3..7);

    match &buffer.history()[0].kind {
        OpKind::Delete { deleted, .. } => assert_eq!(deleted, " two"),
        other => panic!("unexpected op: {other:?}"),
    }
}

use super::*;

fn starts(matches: &[Match]) -> Vec<usize> {
    matches.iter().map(|m| m.start).collect()
}

#[test]
fn test_case_insensitive_scan() {
    let snapshot = Snapshot::from_text("foo bar foo");
    let matches = SearchIndexer::scan(&snapshot, "Foo", false);

    assert_eq!(starts(&matches), vec![0, 8]);
    assert!(matches.iter().all(|m| m.len() == 3));
}

#[test]
fn test_case_sensitive_scan() {
    let snapshot = Snapshot::from_text("foo bar foo");
    assert!(SearchIndexer::scan(&snapshot, "Foo", true).is_empty());
    assert_eq!(starts(&SearchIndexer::scan(&snapshot, "foo", true)), vec![0, 8]);
}

#[test]
fn test_empty_term_is_inactive() {
    let snapshot = Snapshot::from_text("anything");
    assert!(SearchIndexer::scan(&snapshot, "", true).is_empty());
}

#[test]
fn test_matches_never_overlap() {
    let snapshot = Snapshot::from_text("aaaaa");
    let matches = SearchIndexer::scan(&snapshot, "aa", true);

    assert_eq!(starts(&matches), vec![0, 2]);
}

#[test]
fn test_line_and_col() {
    let snapshot = Snapshot::from_text("a\nfoo\nb\nc\nd\nxfoo\ne");
    let matches = SearchIndexer::scan(&snapshot, "foo", true);

    assert_eq!(matches.len(), 2);
    assert_eq!((matches[0].line, matches[0].col, matches[0].start), (1, 0, 2));
    assert_eq!((matches[1].line, matches[1].col, matches[1].start), (5, 1, 13));
}

#[test]
fn test_matches_do_not_cross_lines() {
    let snapshot = Snapshot::from_text("fo\no\nfo\r\no");
    assert!(SearchIndexer::scan(&snapshot, "fo\no", true).is_empty());
    assert!(SearchIndexer::scan(&snapshot, "oo", true).is_empty());
}

#[test]
fn test_term_longer_than_any_line() {
    let snapshot = Snapshot::from_text("ab\ncd");
    assert!(SearchIndexer::scan(&snapshot, "abcdef", false).is_empty());
}

#[test]
fn test_offsets_are_chars_not_bytes() {
    let snapshot = Snapshot::from_text("变量 Ünïcode ünïcode");
    let matches = SearchIndexer::scan(&snapshot, "ÜNÏCODE", false);

    assert_eq!(starts(&matches), vec![3, 11]);
    assert_eq!(matches[1].end, 18);
}

#[test]
fn test_scan_is_idempotent_and_ascending() {
    let snapshot = Snapshot::from_text("x foo foo\nfoofoo\n\nfoo");
    let first = SearchIndexer::scan(&snapshot, "foo", true);
    let second = SearchIndexer::scan(&snapshot, "foo", true);

    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
    assert!(first.windows(2).all(|w| w[0].end <= w[1].start));
}

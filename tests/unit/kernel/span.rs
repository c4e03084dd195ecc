use super::*;

fn spans(ranges: &[(usize, usize)]) -> NormalizedSpans {
    ranges.iter().map(|&(s, e)| Span::new(s, e)).collect()
}

#[test]
fn test_span_basics() {
    let span = Span::from_len(3, 4);
    assert_eq!(span, Span::new(3, 7));
    assert_eq!(span.len(), 4);
    assert!(span.contains(3));
    assert!(!span.contains(7));
    assert!(span.intersects(&Span::new(7, 9)));
    assert!(!span.intersects(&Span::new(8, 9)));
}

#[test]
#[should_panic]
fn test_inverted_span_panics() {
    Span::new(5, 2);
}

#[test]
fn test_normalize_merges_overlapping_and_abutting() {
    let set = spans(&[(10, 12), (0, 3), (3, 5), (11, 15), (20, 20)]);
    assert_eq!(set.as_slice(), &[Span::new(0, 5), Span::new(10, 15)]);
    assert_eq!(set.bounds(), Some(Span::new(0, 15)));
}

#[test]
fn test_difference() {
    let a = spans(&[(0, 10), (20, 30)]);
    let b = spans(&[(2, 4), (8, 22), (25, 26)]);

    assert_eq!(
        a.difference(&b).as_slice(),
        &[
            Span::new(0, 2),
            Span::new(4, 8),
            Span::new(22, 25),
            Span::new(26, 30)
        ]
    );
    assert_eq!(b.difference(&a).as_slice(), &[Span::new(10, 20)]);
}

#[test]
fn test_difference_with_empty_sets() {
    let a = spans(&[(1, 4)]);
    let empty = NormalizedSpans::default();

    assert_eq!(a.difference(&empty), a);
    assert!(empty.difference(&a).is_empty());
    assert!(a.difference(&a).is_empty());
}

#[test]
fn test_invalidated_range_identical_sets() {
    let a = spans(&[(0, 3), (3, 6)]);
    let b = spans(&[(0, 6)]);
    assert_eq!(invalidated_range(&a, &b), None);
}

#[test]
fn test_invalidated_range_covers_removed_and_added() {
    let previous = spans(&[(0, 3), (40, 43)]);
    let current = spans(&[(0, 3), (10, 13)]);
    assert_eq!(
        invalidated_range(&previous, &current),
        Some(Span::new(10, 43))
    );

    let current = spans(&[(0, 3)]);
    assert_eq!(
        invalidated_range(&previous, &current),
        Some(Span::new(40, 43))
    );
}

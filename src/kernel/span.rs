//! Char spans and normalized span sets.

/// Half-open char range `[start, end)` within one snapshot version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    pub fn from_len(start: usize, len: usize) -> Self {
        Self::new(start, start + len)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Touching spans intersect; disjoint ones do not.
    pub fn intersects(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn cover(&self, other: &Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// Sorted, non-empty spans with overlapping and abutting neighbours merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSpans(Vec<Span>);

impl NormalizedSpans {
    pub fn new(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut spans: Vec<Span> = spans.into_iter().filter(|s| !s.is_empty()).collect();
        spans.sort_unstable();

        let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        Self(merged)
    }

    pub fn as_slice(&self) -> &[Span] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// From the first start to the last end.
    pub fn bounds(&self) -> Option<Span> {
        let first = self.0.first()?;
        let last = self.0.last()?;
        Some(Span::new(first.start, last.end))
    }

    /// The parts of `self` not covered by `other`.
    pub fn difference(&self, other: &NormalizedSpans) -> NormalizedSpans {
        let mut out = Vec::new();
        let mut j = 0usize;

        for span in &self.0 {
            let mut start = span.start;
            while j < other.0.len() && other.0[j].end <= start {
                j += 1;
            }

            let mut k = j;
            while k < other.0.len() && other.0[k].start < span.end {
                let cut = other.0[k];
                if cut.start > start {
                    out.push(Span::new(start, cut.start));
                }
                start = start.max(cut.end);
                if start >= span.end {
                    break;
                }
                k += 1;
            }

            if start < span.end {
                out.push(Span::new(start, span.end));
            }
        }

        NormalizedSpans(out)
    }
}

impl FromIterator<Span> for NormalizedSpans {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Range a reader must redraw when `previous` is replaced by `current`, or `None`
/// when both sets cover exactly the same text.
pub fn invalidated_range(previous: &NormalizedSpans, current: &NormalizedSpans) -> Option<Span> {
    let removed = previous.difference(current).bounds();
    let added = current.difference(previous).bounds();

    match (removed, added) {
        (Some(removed), Some(added)) => Some(removed.cover(&added)),
        (removed, added) => removed.or(added),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/span.rs"]
mod tests;

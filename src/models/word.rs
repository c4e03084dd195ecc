//! 光标处单词解析：标识符 / 空白 / 其它三种字符类，按字素簇切分

use super::snapshot::Snapshot;
use crate::kernel::services::ports::{Caret, WordResolver};
use crate::kernel::span::Span;
use unicode_segmentation::UnicodeSegmentation;
use unicode_xid::UnicodeXID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Identifier,
    Whitespace,
    Other,
}

impl WordClass {
    fn of(grapheme: &str) -> Self {
        match grapheme.chars().next() {
            Some(c) if c.is_whitespace() => WordClass::Whitespace,
            Some(c) if c.is_xid_start() || c.is_xid_continue() || c == '_' => {
                WordClass::Identifier
            }
            _ => WordClass::Other,
        }
    }

    pub fn is_significant(self) -> bool {
        self != WordClass::Whitespace
    }
}

/// Grapheme bounds `(start, end)` of the run of same-class graphemes around `col`.
/// An out-of-range `col` yields the empty range at the line end.
pub fn word_bounds_at(line: &str, col: usize) -> (usize, usize, Option<WordClass>) {
    let classes: Vec<WordClass> = line.graphemes(true).map(WordClass::of).collect();
    let Some(&class) = classes.get(col) else {
        return (classes.len(), classes.len(), None);
    };

    let start = classes[..col]
        .iter()
        .rposition(|c| *c != class)
        .map_or(0, |idx| idx + 1);
    let end = classes[col..]
        .iter()
        .position(|c| *c != class)
        .map_or(classes.len(), |idx| col + idx);

    (start, end, Some(class))
}

/// Char span of the significant word at `position`, if any.
///
/// A caret parked at the end of a line resolves to the word just before it.
pub fn word_span_at(snapshot: &Snapshot, position: usize) -> Option<Span> {
    let row = snapshot.line_of(position);
    let line_start = snapshot.line_start(row);
    let line = snapshot.line_text(row);

    let widths: Vec<usize> = line.graphemes(true).map(|g| g.chars().count()).collect();
    if widths.is_empty() {
        return None;
    }

    let char_col = position - line_start;
    let mut acc = 0usize;
    let mut col = widths.len();
    for (idx, width) in widths.iter().enumerate() {
        if char_col < acc + width {
            col = idx;
            break;
        }
        acc += width;
    }
    if col == widths.len() {
        col -= 1;
    }

    let (start, end, class) = word_bounds_at(&line, col);
    if !class.is_some_and(WordClass::is_significant) {
        return None;
    }

    let start_char = line_start + widths[..start].iter().sum::<usize>();
    let end_char = start_char + widths[start..end].iter().sum::<usize>();
    Some(Span::new(start_char, end_char))
}

/// Default resolver: selection start when a selection exists, otherwise the caret.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordAtCaret;

impl WordResolver for WordAtCaret {
    fn word_at(&self, snapshot: &Snapshot, caret: &Caret) -> Option<String> {
        let span = word_span_at(snapshot, caret.anchor())?;
        Some(snapshot.text(span))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/word.rs"]
mod tests;

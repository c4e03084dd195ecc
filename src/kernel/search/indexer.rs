//! 行内字面量搜索
//!
//! - 逐行扫描，匹配不跨行
//! - 每次命中后游标前进 term 长度，匹配互不重叠
//! - 区分大小写为逐字符精确比较；不区分时逐字符折叠为小写（一对一映射，字符偏移不变）

use super::Match;
use crate::models::Snapshot;
use memchr::memmem::Finder;
use std::borrow::Cow;

pub struct SearchIndexer;

impl SearchIndexer {
    /// Ordered, non-overlapping matches of `term`. An empty term yields none.
    pub fn scan(snapshot: &Snapshot, term: &str, case_sensitive: bool) -> Vec<Match> {
        if term.is_empty() {
            return Vec::new();
        }

        let needle: Cow<'_, str> = if case_sensitive {
            Cow::Borrowed(term)
        } else {
            Cow::Owned(fold_case(term))
        };
        let needle_chars = needle.chars().count();
        let finder = Finder::new(needle.as_bytes());

        let mut matches = Vec::new();
        for (row, text) in snapshot.lines() {
            if text.chars().count() < needle_chars {
                continue;
            }
            let haystack: Cow<'_, str> = if case_sensitive {
                text
            } else {
                Cow::Owned(fold_case(&text))
            };

            let line_start = snapshot.line_start(row);
            let mut byte = 0usize;
            let mut col = 0usize;
            while let Some(pos) = finder.find(&haystack.as_bytes()[byte..]) {
                let at = byte + pos;
                col += haystack[byte..at].chars().count();
                let start = line_start + col;
                matches.push(Match::new(start, start + needle_chars, row, col));

                byte = at + needle.len();
                col += needle_chars;
            }
        }

        tracing::debug!(
            version = snapshot.version(),
            term_len = needle_chars,
            case_sensitive,
            matches = matches.len(),
            "scan complete"
        );
        matches
    }
}

/// Simple per-char lowercase; chars with multi-char lowercase forms stay as-is.
fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/search/indexer.rs"]
mod tests;

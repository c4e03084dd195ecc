//! 文本快照：某一版本缓冲区内容的不可变视图
//!
//! - 行枚举（不含换行符）
//! - 字符偏移 ↔ 行号映射
//! - Rope 共享存储，克隆为 O(1)

use super::text_buffer::slice_to_cow;
use crate::kernel::span::Span;
use ropey::Rope;
use std::borrow::Cow;

#[derive(Clone, Debug)]
pub struct Snapshot {
    version: u64,
    rope: Rope,
}

impl Snapshot {
    pub fn new(version: u64, rope: Rope) -> Self {
        Self { version, rope }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(0, Rope::from_str(text))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Index of the final line. A trailing line break opens an empty last line.
    pub fn last_line(&self) -> usize {
        self.rope.len_lines() - 1
    }

    /// The whole snapshot as one span.
    pub fn extent(&self) -> Span {
        Span::new(0, self.len_chars())
    }

    pub fn line_start(&self, row: usize) -> usize {
        assert!(row < self.len_lines(), "line {row} out of snapshot bounds");
        self.rope.line_to_char(row)
    }

    /// 行尾（不含换行符）的字符偏移
    pub fn line_end(&self, row: usize) -> usize {
        self.line_start(row) + self.line_len(row)
    }

    pub fn line_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let len = slice.len_chars();
        if len == 0 {
            return 0;
        }
        if len >= 2 && slice.char(len - 2) == '\r' && slice.char(len - 1) == '\n' {
            return len - 2;
        }
        if is_line_break(slice.char(len - 1)) {
            len - 1
        } else {
            len
        }
    }

    pub fn line_text(&self, row: usize) -> Cow<'_, str> {
        let len = self.line_len(row);
        slice_to_cow(self.rope.line(row).slice(..len))
    }

    /// Every line with its index, line breaks stripped.
    pub fn lines(&self) -> impl Iterator<Item = (usize, Cow<'_, str>)> + '_ {
        (0..self.len_lines()).map(move |row| (row, self.line_text(row)))
    }

    pub fn line_of(&self, pos: usize) -> usize {
        assert!(
            pos <= self.len_chars(),
            "position {pos} beyond snapshot length {}",
            self.len_chars()
        );
        self.rope.char_to_line(pos)
    }

    pub fn text(&self, span: Span) -> String {
        assert!(
            span.end <= self.len_chars(),
            "span {span:?} beyond snapshot length {}",
            self.len_chars()
        );
        self.rope.slice(span.start..span.end).to_string()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
#[path = "../../tests/unit/models/snapshot.rs"]
mod tests;

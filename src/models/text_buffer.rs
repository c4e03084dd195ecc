//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 每次编辑递增版本号并生成快照
//! - 保留编辑日志，供旧版本位置映射到新版本

use super::edit_op::{EditOp, OpKind, Tracking};
use super::snapshot::Snapshot;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::ops::Range;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    version: u64,
    history: Vec<EditOp>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            version: 0,
            history: Vec::new(),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn version(&self) -> u64 {
        self.version
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

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.version, self.rope.clone())
    }

    pub fn history(&self) -> &[EditOp] {
        &self.history
    }

    pub fn insert(&mut self, char_offset: usize, text: &str) -> u64 {
        self.apply(OpKind::Insert {
            char_offset,
            text: text.to_string(),
        })
    }

    pub fn delete(&mut self, range: Range<usize>) -> u64 {
        assert!(
            range.start <= range.end && range.end <= self.rope.len_chars(),
            "delete range {range:?} out of buffer bounds"
        );
        let deleted = self.rope.slice(range.clone()).to_string();
        self.apply(OpKind::Delete {
            start: range.start,
            end: range.end,
            deleted,
        })
    }

    /// Applies an edit and returns the new version.
    pub fn apply(&mut self, kind: OpKind) -> u64 {
        match &kind {
            OpKind::Insert { char_offset, text } => {
                assert!(
                    *char_offset <= self.rope.len_chars(),
                    "insert offset {char_offset} out of buffer bounds"
                );
                self.rope.insert(*char_offset, text);
            }
            OpKind::Delete { start, end, .. } => {
                self.rope.remove(*start..*end);
            }
        }
        self.version += 1;
        self.history.push(EditOp {
            version: self.version,
            kind,
        });
        self.version
    }

    /// Maps `pos` from `from_version` forward to `to_version`.
    pub fn translate(
        &self,
        pos: usize,
        from_version: u64,
        to_version: u64,
        tracking: Tracking,
    ) -> usize {
        assert!(
            from_version <= to_version && to_version <= self.version,
            "cannot translate from version {from_version} to {to_version} (current {})",
            self.version
        );
        // history[i] produced version i + 1
        self.history[from_version as usize..to_version as usize]
            .iter()
            .fold(pos, |pos, op| op.translate(pos, tracking))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;

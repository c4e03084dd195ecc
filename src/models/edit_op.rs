//! 编辑增量：记录每个版本的插入/删除，用于跨版本位置追踪

use serde::{Deserialize, Serialize};

/// 插入点恰好落在位置上时，位置随插入右移（Positive）还是保持不动（Negative）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Insert {
        char_offset: usize,
        text: String,
    },
    Delete {
        start: usize,
        end: usize,
        deleted: String,
    },
}

/// One edit, tagged with the buffer version it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub version: u64,
    pub kind: OpKind,
}

impl EditOp {
    pub fn insert(version: u64, char_offset: usize, text: String) -> Self {
        Self {
            version,
            kind: OpKind::Insert { char_offset, text },
        }
    }

    pub fn delete(version: u64, start: usize, end: usize, deleted: String) -> Self {
        Self {
            version,
            kind: OpKind::Delete {
                start,
                end,
                deleted,
            },
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self.kind, OpKind::Insert { .. })
    }

    /// 插入或删除的字符数
    pub fn char_delta(&self) -> usize {
        match &self.kind {
            OpKind::Insert { text, .. } => text.chars().count(),
            OpKind::Delete { start, end, .. } => end - start,
        }
    }

    /// Maps a char offset from the version before this op to the version after it.
    pub fn translate(&self, pos: usize, tracking: Tracking) -> usize {
        match &self.kind {
            OpKind::Insert { char_offset, .. } => {
                let moves = pos > *char_offset
                    || (pos == *char_offset && tracking == Tracking::Positive);
                if moves {
                    pos + self.char_delta()
                } else {
                    pos
                }
            }
            OpKind::Delete { start, end, .. } => {
                if pos <= *start {
                    pos
                } else if pos >= *end {
                    pos - (end - start)
                } else {
                    *start
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;

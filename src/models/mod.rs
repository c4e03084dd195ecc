//! 数据模型层

pub mod edit_op;
pub mod snapshot;
pub mod text_buffer;
pub mod word;

pub use edit_op::{EditOp, OpKind, Tracking};
pub use snapshot::Snapshot;
pub use text_buffer::{slice_to_cow, TextBuffer};
pub use word::{word_bounds_at, word_span_at, WordAtCaret, WordClass};

use super::FoldRegion;
use crate::kernel::search::Match;
use crate::kernel::services::ports::MAX_MARGIN_LINES;

/// Folds the lines between matches, leaving `margin_lines` of context visible
/// on each side of every matching line.
#[derive(Debug, Clone, Copy)]
pub struct FoldRegionBuilder {
    margin_lines: usize,
}

impl FoldRegionBuilder {
    pub fn new(margin_lines: u8) -> Self {
        debug_assert!(margin_lines <= MAX_MARGIN_LINES);
        Self {
            margin_lines: margin_lines as usize,
        }
    }

    pub fn margin_lines(&self) -> usize {
        self.margin_lines
    }

    /// `matches` must be in ascending order; `last_line` is the snapshot's
    /// final line index. No matches means nothing to anchor a fold on.
    pub fn build(&self, matches: &[Match], last_line: usize) -> Vec<FoldRegion> {
        let mut regions = Vec::new();
        if matches.is_empty() {
            return regions;
        }

        let reach = self.margin_lines + 1;
        let mut cursor_line = 0usize;
        for m in matches {
            if let Some(end_line) = m.line.checked_sub(reach) {
                if end_line > cursor_line {
                    regions.push(FoldRegion::new(cursor_line, end_line));
                }
            }
            cursor_line = m.line + reach;
        }

        if last_line > cursor_line {
            regions.push(FoldRegion::new(cursor_line, last_line));
        }

        tracing::debug!(
            matches = matches.len(),
            margin = self.margin_lines,
            regions = regions.len(),
            "fold regions built"
        );
        regions
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/fold/builder.rs"]
mod tests;

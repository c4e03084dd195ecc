use super::FoldRegion;
use crate::kernel::notify::{ChangeListener, ChangeNotification};
use crate::kernel::services::ports::SnapshotProvider;
use crate::kernel::span::{NormalizedSpans, Span};
use crate::kernel::tracker::DiffTracker;
use crate::models::Snapshot;

#[derive(Debug)]
pub struct FoldRegionTracker {
    regions: Vec<FoldRegion>,
    extents: Vec<Span>,
    diff: DiffTracker,
}

impl Default for FoldRegionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldRegionTracker {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            extents: Vec::new(),
            diff: DiffTracker::new("fold"),
        }
    }

    pub fn regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    pub fn snapshot_version(&self) -> Option<u64> {
        self.diff.snapshot_version()
    }

    /// Exact equality with a region of the latest generation. Overlap or
    /// containment does not count.
    pub fn is_valid_region(&self, candidate: &FoldRegion) -> bool {
        self.regions.contains(candidate)
    }

    /// Validity by char extent, for hosts that only know a collapsible's span.
    /// `extent` must be expressed in the tracker's snapshot version.
    pub fn is_valid_extent(&self, extent: Span) -> bool {
        self.extents.contains(&extent)
    }

    /// Regions touching the inclusive line range `first_line..=last_line`.
    pub fn regions_intersecting(
        &self,
        first_line: usize,
        last_line: usize,
    ) -> impl Iterator<Item = &FoldRegion> + '_ {
        self.regions
            .iter()
            .filter(move |region| region.intersects_lines(first_line, last_line))
    }

    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.diff.set_listener(listener);
    }

    pub fn clear_listener(&mut self) {
        self.diff.clear_listener();
    }

    /// Replaces the held regions. `cleared` marks the generation with no matches,
    /// which invalidates the whole snapshot.
    pub fn update(
        &mut self,
        regions: Vec<FoldRegion>,
        snapshot: &Snapshot,
        provider: &dyn SnapshotProvider,
        cleared: bool,
    ) -> Option<ChangeNotification> {
        debug_assert!(!cleared || regions.is_empty());
        let extents: Vec<Span> = regions.iter().map(|r| r.extent(snapshot)).collect();
        let current: NormalizedSpans = extents.iter().copied().collect();

        let notification = self.diff.advance(current, snapshot, provider, cleared);
        self.regions = regions;
        self.extents = extents;
        notification
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/fold/tracker.rs"]
mod tests;

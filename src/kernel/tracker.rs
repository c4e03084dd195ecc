//! Generation diffing shared by the highlight and fold trackers.
//!
//! The held span set is translated onto the new snapshot before it is compared,
//! so offsets from different versions never meet directly.

use crate::kernel::notify::{ChangeListener, ChangeNotification, ListenerSlot};
use crate::kernel::services::ports::SnapshotProvider;
use crate::kernel::span::{invalidated_range, NormalizedSpans};
use crate::models::Snapshot;

#[derive(Debug, Default)]
pub struct DiffTracker {
    channel: &'static str,
    spans: NormalizedSpans,
    snapshot_version: Option<u64>,
    listener: ListenerSlot,
}

impl DiffTracker {
    pub fn new(channel: &'static str) -> Self {
        Self {
            channel,
            ..Self::default()
        }
    }

    pub fn spans(&self) -> &NormalizedSpans {
        &self.spans
    }

    pub fn snapshot_version(&self) -> Option<u64> {
        self.snapshot_version
    }

    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener.set(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener.clear();
    }

    /// Replaces the held set with `current` and emits the invalidated range.
    ///
    /// With `cleared` set the whole snapshot is invalidated, provided anything
    /// was held before.
    pub fn advance(
        &mut self,
        current: NormalizedSpans,
        snapshot: &Snapshot,
        provider: &dyn SnapshotProvider,
        cleared: bool,
    ) -> Option<ChangeNotification> {
        let previous = match self.snapshot_version {
            Some(from) => self
                .spans
                .iter()
                .map(|span| provider.translate_span(*span, from, snapshot.version()))
                .collect(),
            None => NormalizedSpans::default(),
        };

        let invalidated = if cleared {
            debug_assert!(current.is_empty());
            (!previous.is_empty()).then(|| snapshot.extent())
        } else {
            invalidated_range(&previous, &current)
        };

        if let Some(bounds) = current.bounds() {
            assert!(
                bounds.end <= snapshot.len_chars(),
                "{} span {bounds:?} beyond snapshot length {}",
                self.channel,
                snapshot.len_chars()
            );
        }

        self.spans = current;
        self.snapshot_version = Some(snapshot.version());

        let Some(invalidated) = invalidated else {
            tracing::trace!(
                channel = self.channel,
                version = snapshot.version(),
                "no visible change"
            );
            return None;
        };

        let notification = ChangeNotification {
            snapshot_version: snapshot.version(),
            invalidated,
        };
        tracing::debug!(
            channel = self.channel,
            version = snapshot.version(),
            start = invalidated.start,
            end = invalidated.end,
            "range invalidated"
        );
        self.listener.emit(&notification);
        Some(notification)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tracker.rs"]
mod tests;

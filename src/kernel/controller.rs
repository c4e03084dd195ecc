//! Search controller: the single entry point a host drives for one buffer.
//!
//! States:
//! - Inactive: empty term, no spans or regions
//! - Active: the current generation holds at least one match
//!
//! A term that matches nowhere leaves the controller Inactive. Every call runs a
//! full rescan synchronously on the caller's thread.

use crate::kernel::error::{EngineError, Result};
use crate::kernel::fold::{FoldRegion, FoldRegionBuilder, FoldRegionTracker};
use crate::kernel::notify::{ChangeListener, ChangeNotification};
use crate::kernel::search::{
    ClassificationTag, HighlightSpan, HighlightTracker, Match, SearchIndexer, SearchTerm,
};
use crate::kernel::services::ports::{Caret, SearchConfig, SnapshotProvider, WordResolver};
use crate::kernel::span::Span;
use crate::models::{Snapshot, WordAtCaret};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Inactive,
    Active,
}

/// Matches computed for one `(snapshot version, term)` pair.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub snapshot_version: u64,
    pub term: SearchTerm,
    pub matches: Vec<Match>,
}

/// Notifications raised by one `set_term`, also delivered to the listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refresh {
    pub highlight: Option<ChangeNotification>,
    pub fold: Option<ChangeNotification>,
}

/// What the host should do with its outlining after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Collapse these regions, all valid for the new generation.
    Collapse { regions: Vec<FoldRegion> },
    /// Expand every region and scroll `reveal` back into view.
    Expand { reveal: usize },
    /// The caret was not on a significant word; nothing changed.
    NoWord,
}

pub struct SearchController {
    provider: Rc<dyn SnapshotProvider>,
    word_resolver: Box<dyn WordResolver>,
    config: SearchConfig,
    generation: Generation,
    highlights: HighlightTracker,
    folds: FoldRegionTracker,
}

#[derive(Default)]
pub struct SearchControllerBuilder {
    provider: Option<Rc<dyn SnapshotProvider>>,
    word_resolver: Option<Box<dyn WordResolver>>,
    config: SearchConfig,
    tag: ClassificationTag,
}

impl SearchControllerBuilder {
    pub fn provider(mut self, provider: Rc<dyn SnapshotProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn word_resolver(mut self, resolver: impl WordResolver + 'static) -> Self {
        self.word_resolver = Some(Box::new(resolver));
        self
    }

    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn classification(mut self, tag: ClassificationTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn build(self) -> Result<SearchController> {
        let provider = self.provider.ok_or_else(|| {
            EngineError::InvalidConfiguration("snapshot provider is required".to_string())
        })?;
        let word_resolver = self
            .word_resolver
            .unwrap_or_else(|| Box::new(WordAtCaret));

        Ok(SearchController {
            provider,
            word_resolver,
            config: self.config,
            generation: Generation::default(),
            highlights: HighlightTracker::new(self.tag),
            folds: FoldRegionTracker::new(),
        })
    }
}

impl SearchController {
    pub fn builder() -> SearchControllerBuilder {
        SearchControllerBuilder::default()
    }

    pub fn new(provider: Rc<dyn SnapshotProvider>, config: SearchConfig) -> Self {
        Self {
            provider,
            word_resolver: Box::new(WordAtCaret),
            config,
            generation: Generation::default(),
            highlights: HighlightTracker::default(),
            folds: FoldRegionTracker::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Takes effect at the next `set_term`.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Current term; empty when inactive.
    pub fn target_text(&self) -> &str {
        &self.generation.term.text
    }

    pub fn term(&self) -> &SearchTerm {
        &self.generation.term
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn state(&self) -> ControllerState {
        if self.generation.matches.is_empty() {
            ControllerState::Inactive
        } else {
            ControllerState::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == ControllerState::Active
    }

    /// Whether any fold region exists.
    pub fn are_tags_active(&self) -> bool {
        !self.folds.regions().is_empty()
    }

    pub fn matches(&self) -> &[Match] {
        &self.generation.matches
    }

    pub fn highlight_spans(&self) -> &[HighlightSpan] {
        self.highlights.spans()
    }

    pub fn regions(&self) -> &[FoldRegion] {
        self.folds.regions()
    }

    pub fn spans_intersecting(&self, range: Span) -> impl Iterator<Item = &HighlightSpan> + '_ {
        self.highlights.spans_intersecting(range)
    }

    pub fn regions_intersecting(
        &self,
        first_line: usize,
        last_line: usize,
    ) -> impl Iterator<Item = &FoldRegion> + '_ {
        self.folds.regions_intersecting(first_line, last_line)
    }

    pub fn is_valid_region(&self, candidate: &FoldRegion) -> bool {
        self.folds.is_valid_region(candidate)
    }

    pub fn is_valid_extent(&self, extent: Span) -> bool {
        self.folds.is_valid_extent(extent)
    }

    pub fn set_highlight_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.highlights.set_listener(listener);
    }

    pub fn set_fold_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.folds.set_listener(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.highlights.clear_listener();
        self.folds.clear_listener();
    }

    /// Rescans the current snapshot for `term`. An empty term deactivates.
    pub fn set_term(&mut self, term: &str) -> Refresh {
        let snapshot = self.provider.current_snapshot();
        self.regenerate(&snapshot, term)
    }

    pub fn generate_tags(&mut self, term: &str) -> Refresh {
        self.set_term(term)
    }

    /// With fold regions present: clear the search and expand. Otherwise search
    /// for the word under the caret and collapse between its matches, even when
    /// an earlier search is still highlighted.
    pub fn toggle(&mut self, caret: Caret) -> ToggleOutcome {
        if self.are_tags_active() {
            self.set_term("");
            return ToggleOutcome::Expand {
                reveal: caret.position,
            };
        }

        let snapshot = self.provider.current_snapshot();
        let Some(word) = self.word_resolver.word_at(&snapshot, &caret) else {
            tracing::debug!(caret = caret.position, "no word under caret");
            return ToggleOutcome::NoWord;
        };

        self.regenerate(&snapshot, &word);
        ToggleOutcome::Collapse {
            regions: self.folds.regions().to_vec(),
        }
    }

    fn regenerate(&mut self, snapshot: &Snapshot, term: &str) -> Refresh {
        let case_sensitive = self.config.case_sensitive;
        let was = self.state();

        let matches = SearchIndexer::scan(snapshot, term, case_sensitive);
        let term = if matches.is_empty() {
            SearchTerm::new("", case_sensitive)
        } else {
            SearchTerm::new(term, case_sensitive)
        };
        let regions = FoldRegionBuilder::new(self.config.margin_lines())
            .build(&matches, snapshot.last_line());

        let provider = &*self.provider;
        let highlight = self.highlights.update(&matches, snapshot, provider);
        let fold = self
            .folds
            .update(regions, snapshot, provider, matches.is_empty());

        self.generation = Generation {
            snapshot_version: snapshot.version(),
            term,
            matches,
        };

        let now = self.state();
        if was != now {
            tracing::info!(
                from = ?was,
                to = ?now,
                version = snapshot.version(),
                "search state changed"
            );
        }

        Refresh { highlight, fold }
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("config", &self.config)
            .field("generation", &self.generation)
            .field("regions", &self.folds.regions().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/controller.rs"]
mod tests;

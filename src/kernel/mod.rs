//! Headless search/highlight/fold engine.

pub mod controller;
pub mod error;
pub mod fold;
pub mod notify;
pub mod registry;
pub mod search;
pub mod services;
pub mod span;
pub mod tracker;

pub use controller::{
    ControllerState, Generation, Refresh, SearchController, SearchControllerBuilder,
    ToggleOutcome,
};
pub use error::{EngineError, Result};
pub use fold::{FoldRegion, FoldRegionBuilder, FoldRegionTracker};
pub use notify::{channel_listener, ChangeListener, ChangeNotification, ChannelListener};
pub use registry::{BufferId, ControllerRegistry};
pub use search::{
    ClassificationTag, HighlightSpan, HighlightTracker, Match, SearchIndexer, SearchTerm,
};
pub use span::{NormalizedSpans, Span};

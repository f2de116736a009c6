//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components and event handlers retrieve it
//! with `use_context::<AppState>()`.

use dioxus::prelude::*;
use drought_data::metadata::MetadataLabel;
use drought_data::search::SearchController;
use drought_data::Dataset;
use std::rc::Rc;

/// Shared state for the drought map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the fetch succeeds; stays None on failure)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Text shown in the metadata line
    pub metadata: Signal<MetadataLabel>,
    /// Location search state machine
    pub search: Signal<SearchController>,
    /// Current contents of the search input
    pub query: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            metadata: Signal::new(MetadataLabel::Loading),
            search: Signal::new(SearchController::new()),
            query: Signal::new(String::new()),
        }
    }

    /// Stations available for nearest-station lookup.
    pub fn stations(&self) -> Option<Rc<Dataset>> {
        self.dataset.peek().clone()
    }
}

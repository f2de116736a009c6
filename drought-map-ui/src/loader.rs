//! One-time dataset load.

use crate::js_bridge;
use crate::state::AppState;
use crate::web;
use drought_data::load::LoadOutcome;
use drought_data::Dataset;
use dioxus::prelude::*;

/// Dataset asset, relative to the page base path.
pub const DATASET_URL: &str = "data/drought_data.geojson";

/// Fetch and validate the dataset.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, String> {
    let body = web::fetch_text(url).await?;
    Dataset::from_geojson(&body).map_err(|e| e.to_string())
}

/// Fetch the dataset, update the metadata line and draw the markers.
///
/// On failure the metadata line shows the error text and no drought layer
/// is drawn. There is no retry; reloading the page is the only refresh.
pub async fn load_drought_data(mut state: AppState) {
    let outcome = LoadOutcome::from_result(fetch_dataset(DATASET_URL).await);

    if let Some(layer) = &outcome.layer {
        js_bridge::render_markers(layer);
    }
    state.metadata.set(outcome.label);
    state.dataset.set(outcome.dataset);
}

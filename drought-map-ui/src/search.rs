//! Event handlers for the location search box.
//!
//! These perform the effects requested by `SearchController`: debounce
//! timers, geocoder fetches, fly-to and the delayed popup.

use crate::js_bridge;
use crate::state::AppState;
use crate::web;
use dioxus::prelude::*;
use drought_data::geocode::parse_response;
use drought_data::search::{SearchAction, DEBOUNCE};

/// Text input changed: restart the debounce timer.
pub fn on_query_input(mut state: AppState, value: String) {
    state.query.set(value.clone());
    let ticket = state.search.write().on_input();

    spawn(async move {
        web::sleep(DEBOUNCE).await;
        let action = state.search.write().on_debounce_elapsed(ticket, &value);
        perform(state, action);
    });
}

/// Search button or Enter key: search now with the current input.
pub fn on_submit(mut state: AppState) {
    let query = state.query.peek().clone();
    let action = state.search.write().submit(&query);
    perform(state, action);
}

fn perform(mut state: AppState, action: SearchAction) {
    let (id, request) = match action {
        SearchAction::Fetch { id, request } => (id, request),
        // the controller is already idle, which hides the list
        SearchAction::ClearResults => return,
        SearchAction::Nothing => return,
    };

    spawn(async move {
        let url = request.url_with(web::encode_uri_component);
        let response = web::fetch_text(&url)
            .await
            .and_then(|body| parse_response(&body).map_err(|e| e.to_string()));

        match response {
            Ok(results) => {
                log::info!("{} results for {:?}", results.len(), request.query);
                state.search.write().on_response(id, results);
            }
            Err(e) => {
                log::error!("Search error: {}", e);
                state.search.write().on_failure(id);
            }
        }
    });
}

/// A result row was clicked: fly there, then open the nearest station popup.
pub fn on_select(mut state: AppState, index: usize) {
    let dataset = state.stations();
    let stations = dataset.as_ref().map(|d| d.stations.as_slice()).unwrap_or(&[]);
    let Some(selection) = state.search.write().select(index, stations) else {
        return;
    };

    log::info!("Flying to {}", selection.result.display_name);
    state.query.set(String::new());
    js_bridge::fly_to(&selection.fly_to);

    if let Some(station_index) = selection.station_index {
        spawn(async move {
            web::sleep(selection.popup_delay).await;
            js_bridge::open_station_popup(station_index);
        });
    }
}

/// Click anywhere outside the search widgets.
pub fn on_outside_click(mut state: AppState) {
    if state.search.peek().is_showing_results() {
        state.search.write().dismiss();
    }
}

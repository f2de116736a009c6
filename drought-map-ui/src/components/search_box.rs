//! Location search box with autocomplete dropdown.

use crate::search;
use crate::state::AppState;
use dioxus::prelude::*;

/// Search input, button and result list.
///
/// Clicks inside this widget stop propagating so the page-level handler only
/// sees clicks outside of it.
#[component]
pub fn SearchBox() -> Element {
    let state = use_context::<AppState>();
    let query = (state.query)();
    let (showing, rows) = {
        let controller = state.search.read();
        let rows: Vec<(usize, String, String)> = controller
            .results()
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.primary_name().to_string(), r.display_name.clone()))
            .collect();
        (controller.is_showing_results(), rows)
    };
    let no_results = rows.is_empty();

    rsx! {
        div {
            class: "search-container",
            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            div {
                style: "display: flex; gap: 4px;",
                input {
                    id: "location-search",
                    r#type: "text",
                    placeholder: "Search for a location...",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| search::on_query_input(state, evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            search::on_submit(state);
                        }
                    },
                }
                button {
                    id: "search-btn",
                    onclick: move |_| search::on_submit(state),
                    "Search"
                }
            }
            if showing {
                div {
                    id: "search-results",
                    class: "search-results active",
                    if no_results {
                        div { class: "search-result-item", "No results found" }
                    }
                    for (index, name, details) in rows {
                        div {
                            key: "{index}",
                            class: "search-result-item",
                            onclick: move |_| search::on_select(state, index),
                            div { class: "result-name", "{name}" }
                            div { class: "result-details", "{details}" }
                        }
                    }
                }
            }
        }
    }
}

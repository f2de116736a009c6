//! World Drought Map
//!
//! Overlays 30-day precipitation anomalies (Z-scores per station) on a dark
//! Leaflet basemap. Each station is a circle marker colored by severity, with
//! a popup listing its precipitation statistics. A search box geocodes place
//! names, flies the map there and opens the nearest station's popup.
//!
//! Data flow:
//! 1. `build.rs` stages `data/drought_data.geojson` into `public/data/`.
//! 2. On mount, the Leaflet bridge is loaded and the map is created.
//! 3. The dataset is fetched once, validated, and drawn as a marker layer;
//!    the metadata line shows its date range (or the load error).
//! 4. Search input is debounced and sent to Nominatim; selecting a result
//!    flies the map and opens the nearest station popup after the animation.

use dioxus::prelude::*;
use drought_data::map::MapConfig;
use drought_map_ui::components::{Legend, MapContainer, MetadataBanner, PageStyle, SearchBox};
use drought_map_ui::state::AppState;
use drought_map_ui::{js_bridge, loader, search};

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("drought-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Create the map and load the dataset once on mount
    use_effect(move || {
        js_bridge::init_map(MAP_ID, &MapConfig::default());
        log::info!("Drought map bridge loading into #{}", MAP_ID);
        spawn(async move {
            loader::load_drought_data(state).await;
        });
    });

    rsx! {
        PageStyle {}
        div {
            style: "position: fixed; inset: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            onclick: move |_| search::on_outside_click(state),

            MapContainer { id: MAP_ID.to_string() }

            div {
                style: "position: absolute; top: 12px; left: 56px; z-index: 1000; padding: 10px 14px; background: rgba(20, 20, 20, 0.85); color: #eee; border-radius: 4px;",
                h1 {
                    style: "margin: 0 0 4px 0; font-size: 18px;",
                    "World Drought Monitor"
                }
                MetadataBanner {}
                div {
                    style: "margin-top: 8px;",
                    SearchBox {}
                }
            }

            Legend {}
        }
    }
}

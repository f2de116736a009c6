//! Typed wrappers around the Leaflet bridge via `js_sys::eval()`.
//!
//! The map functions live in `assets/js/drought-map.js` and are loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module serializes Rust config and marker payloads to JSON
//! and calls those globals.
//!
//! Payloads are spliced into the generated JS as object literals. JSON is a
//! subset of JS expression syntax, so no further escaping is needed.

use drought_data::map::{FlyTo, MapConfig};
use drought_data::marker::MarkerLayer;
use serde_json::Value;

// Embed the Leaflet bridge at compile time
static DROUGHT_MAP_JS: &str = include_str!("../assets/js/drought-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Drought map JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Serialize a payload for splicing into generated JS.
fn to_js_literal<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Failed to serialize map payload: {}", e);
        Value::Null.to_string()
    })
}

/// Wrap `body` in a polling loop that runs once Leaflet, the bridge and the
/// map instance are ready.
fn when_map_ready(label: &str, body: &str) -> String {
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__droughtMapReady && window.__droughtMapInstance) {{
                    clearInterval(poll);
                    try {{
                        {body}
                    }} catch(e) {{ console.error('[Drought] {label} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Load the bridge script with a wait-for-Leaflet polling loop, then create
/// the map inside `container_id`. Call once at app startup.
///
/// The bridge defines functions like `renderDroughtMarkers(...)` via
/// `function` declarations. To make them global (not block-scoped inside the
/// setInterval callback) they are evaluated with an indirect `eval()` once
/// Leaflet is ready and then promoted to `window.*` explicitly.
pub fn init_map(container_id: &str, config: &MapConfig) {
    let store_js = format!(
        "window.__droughtMapScript = {};",
        serde_json::to_string(DROUGHT_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let config_js = to_js_literal(config);
    let init_js = format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(waitForLeaflet);
                    if (!window.__droughtMapReady) {{
                        (0, eval)(window.__droughtMapScript);
                        delete window.__droughtMapScript;
                        if (typeof initDroughtMap !== 'undefined') window.initDroughtMap = initDroughtMap;
                        if (typeof renderDroughtMarkers !== 'undefined') window.renderDroughtMarkers = renderDroughtMarkers;
                        if (typeof flyDroughtMap !== 'undefined') window.flyDroughtMap = flyDroughtMap;
                        if (typeof openStationPopup !== 'undefined') window.openStationPopup = openStationPopup;
                        window.__droughtMapReady = true;
                    }}
                    try {{
                        window.__droughtMapInstance = window.initDroughtMap('{container_id}', {config_js});
                        console.log('Drought map initialized');
                    }} catch(e) {{ console.error('[Drought] initDroughtMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    );
    let _ = js_sys::eval(&init_js);
}

/// Draw the drought marker layer. One circle marker per entry, indexed in
/// dataset order.
pub fn render_markers(layer: &MarkerLayer) {
    let layer_js = to_js_literal(layer);
    call_js(&when_map_ready(
        "renderDroughtMarkers",
        &format!("window.renderDroughtMarkers({});", layer_js),
    ));
}

/// Animate the viewport to a target.
pub fn fly_to(target: &FlyTo) {
    let target_js = to_js_literal(target);
    call_js(&when_map_ready(
        "flyDroughtMap",
        &format!("window.flyDroughtMap({});", target_js),
    ));
}

/// Open the popup of the marker at `index`.
pub fn open_station_popup(index: usize) {
    call_js(&when_map_ready(
        "openStationPopup",
        &format!("window.openStationPopup({});", index),
    ));
}

//! Page-wide stylesheet for popups and the search dropdown.

use dioxus::prelude::*;

static PAGE_CSS: &str = include_str!("../../assets/css/drought-map.css");

/// Injects the stylesheet used by Leaflet popups and the search widgets.
#[component]
pub fn PageStyle() -> Element {
    rsx! {
        style { "{PAGE_CSS}" }
    }
}

//! Map legend listing every severity band.

use dioxus::prelude::*;
use drought_data::classify::Severity;

/// Color swatch and status phrase per band, driest first.
#[component]
pub fn Legend() -> Element {
    let bands: Vec<(&str, &str)> = Severity::ALL
        .iter()
        .map(|band| (band.color(), band.status()))
        .collect();

    rsx! {
        div {
            style: "position: absolute; bottom: 24px; right: 12px; z-index: 1000; padding: 8px 12px; background: rgba(20, 20, 20, 0.85); color: #eee; border-radius: 4px; font-size: 12px;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "30-day Precipitation"
            }
            for (color, status) in bands {
                div {
                    key: "{status}",
                    style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 50%; border: 1px solid #000; background: {color};",
                    }
                    "{status}"
                }
            }
        }
    }
}

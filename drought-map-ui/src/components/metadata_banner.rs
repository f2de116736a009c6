//! Dataset metadata line.

use crate::state::AppState;
use dioxus::prelude::*;
use drought_data::metadata::{MetadataLabel, SAMPLE_MARKER};

/// Shows the dataset date range, a sample-data marker, or the load error.
#[component]
pub fn MetadataBanner() -> Element {
    let state = use_context::<AppState>();
    let label = state.metadata.read().clone();
    let is_sample = label.is_sample();
    let text = match &label {
        MetadataLabel::Loaded { date_range, .. } => date_range.clone(),
        other => other.text(),
    };

    rsx! {
        div {
            style: "font-size: 12px; color: #bbb;",
            "Data: "
            span {
                id: "update-date",
                "{text}"
                if is_sample {
                    " "
                    span {
                        style: "color: #ef8a62; font-weight: 600;",
                        "{SAMPLE_MARKER}"
                    }
                }
            }
        }
    }
}

//! The metadata line shown above the map.

use crate::station::Metadata;

pub const LOADING_TEXT: &str = "Loading data...";
pub const ERROR_TEXT: &str = "Error loading data";
pub const SAMPLE_MARKER: &str = "(SAMPLE DATA)";

/// What the metadata display currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataLabel {
    Loading,
    Loaded { date_range: String, is_sample: bool },
    Failed,
}

impl MetadataLabel {
    /// Label for a successfully loaded dataset. Absent metadata shows nothing.
    pub fn loaded(metadata: Option<&Metadata>) -> Self {
        let metadata = metadata.cloned().unwrap_or_default();
        MetadataLabel::Loaded {
            date_range: metadata.date_range,
            is_sample: metadata.is_sample,
        }
    }

    /// Plain-text rendering of the label.
    pub fn text(&self) -> String {
        match self {
            MetadataLabel::Loading => LOADING_TEXT.to_string(),
            MetadataLabel::Failed => ERROR_TEXT.to_string(),
            MetadataLabel::Loaded {
                date_range,
                is_sample: true,
            } => format!("{} {}", date_range, SAMPLE_MARKER),
            MetadataLabel::Loaded { date_range, .. } => date_range.clone(),
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, MetadataLabel::Loaded { is_sample: true, .. })
    }
}

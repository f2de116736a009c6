//! What the page shows once the dataset fetch settles.

use crate::marker::MarkerLayer;
use crate::metadata::MetadataLabel;
use crate::station::Dataset;
use std::fmt::Display;
use std::rc::Rc;

/// Result of the one-time dataset load. A failed load carries no markers and
/// no dataset; nothing is rendered partially.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub label: MetadataLabel,
    pub layer: Option<MarkerLayer>,
    pub dataset: Option<Rc<Dataset>>,
}

impl LoadOutcome {
    pub fn from_result<E: Display>(result: Result<Dataset, E>) -> Self {
        match result {
            Ok(dataset) => {
                let label = MetadataLabel::loaded(dataset.metadata.as_ref());
                let layer = MarkerLayer::from_dataset(&dataset);
                log::info!("Drawing {} drought markers", layer.markers.len());
                LoadOutcome {
                    label,
                    layer: Some(layer),
                    dataset: Some(Rc::new(dataset)),
                }
            }
            Err(e) => {
                log::error!("Error loading drought data: {}", e);
                LoadOutcome {
                    label: MetadataLabel::Failed,
                    layer: None,
                    dataset: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::tests::station;
    use crate::station::Metadata;

    #[test]
    fn test_failed_fetch_shows_error_and_no_markers() {
        let outcome = LoadOutcome::from_result::<String>(Err("NetworkError".to_string()));
        assert_eq!(outcome.label.text(), "Error loading data");
        assert!(outcome.layer.is_none());
        assert!(outcome.dataset.is_none());
    }

    #[test]
    fn test_malformed_dataset_is_a_failed_load() {
        let outcome = LoadOutcome::from_result(Dataset::from_geojson("{\"type\":\"Feature\"}"));
        assert_eq!(outcome.label, MetadataLabel::Failed);
        assert!(outcome.layer.is_none());
    }

    #[test]
    fn test_successful_load() {
        let dataset = Dataset {
            stations: vec![station(1.0, 2.0, -1.0), station(3.0, 4.0, 1.0)],
            metadata: Some(Metadata {
                date_range: "Sep 15 - Oct 15, 2026".to_string(),
                is_sample: true,
            }),
        };
        let outcome = LoadOutcome::from_result::<String>(Ok(dataset));
        assert_eq!(outcome.label.text(), "Sep 15 - Oct 15, 2026 (SAMPLE DATA)");
        assert_eq!(outcome.layer.unwrap().markers.len(), 2);
        assert_eq!(outcome.dataset.unwrap().len(), 2);
    }
}

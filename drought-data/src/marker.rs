//! Circle marker payloads for the drought layer.
//!
//! A marker is either resting or hovered; there is no third style. The JS
//! bridge receives both styles up front and swaps between them on
//! `mouseover`/`mouseout`.

use crate::popup::popup_html;
use crate::station::Dataset;
use serde::Serialize;

/// Stroke color shared by all markers.
pub const MARKER_STROKE: &str = "#000";

/// Maximum popup width in pixels.
pub const POPUP_MAX_WIDTH: u32 = 300;

/// Leaflet path style options that change on hover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub const RESTING: MarkerStyle = MarkerStyle {
        radius: 8.0,
        weight: 1.0,
        opacity: 0.8,
        fill_opacity: 0.7,
    };

    pub const HOVERED: MarkerStyle = MarkerStyle {
        radius: 12.0,
        weight: 2.0,
        opacity: 0.8,
        fill_opacity: 0.9,
    };
}

/// One marker, positioned at its station. `index` matches the dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub index: usize,
    pub lat: f64,
    pub lon: f64,
    pub fill_color: &'static str,
    pub popup_html: String,
}

/// Everything the bridge needs to draw the drought layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayer {
    pub markers: Vec<MarkerSpec>,
    pub stroke_color: &'static str,
    pub resting: MarkerStyle,
    pub hovered: MarkerStyle,
    pub popup_max_width: u32,
}

impl MarkerLayer {
    /// Build one marker per station, in dataset order.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let markers = dataset
            .stations
            .iter()
            .enumerate()
            .map(|(index, station)| MarkerSpec {
                index,
                lat: station.lat,
                lon: station.lon,
                fill_color: station.severity().color(),
                popup_html: popup_html(station),
            })
            .collect();

        Self {
            markers,
            stroke_color: MARKER_STROKE,
            resting: MarkerStyle::RESTING,
            hovered: MarkerStyle::HOVERED,
            popup_max_width: POPUP_MAX_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::tests::station;

    #[test]
    fn test_one_marker_per_station() {
        let dataset = Dataset {
            stations: vec![
                station(10.0, 20.0, -2.5),
                station(-5.0, 100.0, 0.0),
                station(60.0, -40.0, 1.5),
            ],
            metadata: None,
        };
        let layer = MarkerLayer::from_dataset(&dataset);
        assert_eq!(layer.markers.len(), 3);
        for (i, marker) in layer.markers.iter().enumerate() {
            assert_eq!(marker.index, i);
            assert_eq!(marker.lat, dataset.stations[i].lat);
            assert_eq!(marker.lon, dataset.stations[i].lon);
        }
        assert_eq!(layer.markers[0].fill_color, "#ef8a62");
        assert_eq!(layer.markers[1].fill_color, "#f5f5f5");
        assert_eq!(layer.markers[2].fill_color, "#8bc3dc");
        assert!(layer.markers[0].popup_html.contains("Much Drier than Normal"));
    }

    #[test]
    fn test_payload_carries_only_two_styles() {
        let dataset = Dataset {
            stations: vec![station(1.0, 2.0, -1.0)],
            metadata: None,
        };
        let json = serde_json::to_value(MarkerLayer::from_dataset(&dataset)).unwrap();

        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["hovered", "markers", "popupMaxWidth", "resting", "strokeColor"]
        );

        // per-marker entries never override the shared styles
        let mut marker_keys: Vec<&str> = json["markers"][0]
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        marker_keys.sort_unstable();
        assert_eq!(marker_keys, ["fillColor", "index", "lat", "lon", "popupHtml"]);

        assert!(MarkerStyle::HOVERED.radius > MarkerStyle::RESTING.radius);
        assert_eq!(MarkerStyle::HOVERED.opacity, MarkerStyle::RESTING.opacity);
    }

    #[test]
    fn test_layer_json_uses_leaflet_option_names() {
        let layer = MarkerLayer::from_dataset(&Dataset::default());
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["resting"]["radius"], 8.0);
        assert_eq!(json["resting"]["fillOpacity"], 0.7);
        assert_eq!(json["hovered"]["radius"], 12.0);
        assert_eq!(json["hovered"]["weight"], 2.0);
        assert_eq!(json["strokeColor"], "#000");
        assert_eq!(json["popupMaxWidth"], 300);
        assert!(json["markers"].as_array().unwrap().is_empty());
    }
}

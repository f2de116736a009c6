//! Map viewport and basemap configuration.
//!
//! These structs are serialized to JSON and handed to the Leaflet bridge, so
//! field names follow Leaflet's option names (camelCase).

use serde::Serialize;
use std::time::Duration;

/// Zoom level used when flying to a search result.
pub const FLY_ZOOM: u8 = 6;

/// Duration of the fly-to animation.
pub const FLY_DURATION: Duration = Duration::from_millis(1500);

const DARK_TILES_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
const DARK_TILES_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

/// Basemap tile layer options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerConfig {
    pub url: String,
    pub attribution: String,
    pub subdomains: String,
    pub max_zoom: u8,
}

impl Default for TileLayerConfig {
    fn default() -> Self {
        Self {
            url: DARK_TILES_URL.to_string(),
            attribution: DARK_TILES_ATTRIBUTION.to_string(),
            subdomains: "abcd".to_string(),
            max_zoom: 20,
        }
    }
}

/// Initial viewport and map options.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Seamless horizontal wrapping across the antimeridian
    pub world_copy_jump: bool,
    pub tiles: TileLayerConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [20.0, 0.0],
            zoom: 2,
            min_zoom: 2,
            max_zoom: 10,
            world_copy_jump: true,
            tiles: TileLayerConfig::default(),
        }
    }
}

/// An imperative viewport transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlyTo {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
    /// Seconds, as Leaflet expects
    pub duration: f64,
}

impl FlyTo {
    /// Fly to a coordinate at the fixed search zoom and duration.
    pub fn to(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            zoom: FLY_ZOOM,
            duration: FLY_DURATION.as_secs_f64(),
        }
    }
}

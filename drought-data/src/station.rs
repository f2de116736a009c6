//! Typed station records loaded from the drought GeoJSON asset.
//!
//! The asset is a `FeatureCollection` of `Point` features plus an optional
//! top-level `metadata` object:
//!
//! ```text
//! {
//!   "type": "FeatureCollection",
//!   "metadata": { "date_range": "Sep 15 - Oct 15, 2026", "is_sample": false },
//!   "features": [
//!     {
//!       "type": "Feature",
//!       "geometry": { "type": "Point", "coordinates": [-120.25, 38.75] },
//!       "properties": {
//!         "z_score": -1.2, "z_score_raw": -1.35,
//!         "current_prcp": 2.1, "historical_mean": 4.8, "years_of_data": 42
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Every feature is validated when the dataset is built. Loading stops at the
//! first malformed feature and the error names its index.

use crate::classify::{Badge, Severity};
use crate::error::{DatasetError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One weather station with its precipitation anomaly statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub lat: f64,
    pub lon: f64,
    /// Precipitation over the last 30 days (cm)
    pub current_prcp: f64,
    /// Historical mean for the same window (cm)
    pub historical_mean: f64,
    pub years_of_data: u32,
    /// Smoothed Z-score, drives color and status
    pub z_score: f64,
    /// Unsmoothed Z-score, displayed in the popup
    pub z_score_raw: f64,
}

impl Station {
    pub fn severity(&self) -> Severity {
        Severity::from_z_score(self.z_score)
    }

    pub fn badge(&self) -> Badge {
        Badge::from_z_score(self.z_score)
    }

    /// Current minus historical precipitation (cm).
    pub fn difference(&self) -> f64 {
        self.current_prcp - self.historical_mean
    }
}

/// Optional top-level dataset metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub date_range: String,
    /// True when the asset is placeholder data rather than a live export
    #[serde(default)]
    pub is_sample: bool,
}

/// The full drought dataset. Loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub stations: Vec<Station>,
    pub metadata: Option<Metadata>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    metadata: Option<Metadata>,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

impl Dataset {
    /// Parse and validate a GeoJSON document.
    pub fn from_geojson(json: &str) -> Result<Self> {
        let raw: RawCollection = serde_json::from_str(json)?;
        if raw.kind != "FeatureCollection" {
            return Err(DatasetError::NotFeatureCollection(raw.kind));
        }

        let stations = raw
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| station_from_feature(index, feature))
            .collect::<Result<Vec<_>>>()?;

        log::info!("Loaded {} drought stations", stations.len());
        Ok(Dataset {
            stations,
            metadata: raw.metadata,
        })
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of stations in each severity band, driest first.
    pub fn severity_counts(&self) -> [(Severity, usize); 7] {
        Severity::ALL.map(|band| {
            let count = self
                .stations
                .iter()
                .filter(|s| s.severity() == band)
                .count();
            (band, count)
        })
    }
}

fn station_from_feature(index: usize, feature: &RawFeature) -> Result<Station> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| invalid_geometry(index, "geometry is missing"))?;
    if geometry.kind != "Point" {
        return Err(invalid_geometry(
            index,
            format!("expected Point, found {}", geometry.kind),
        ));
    }
    let (lon, lat) = point_coordinates(index, &geometry.coordinates)?;

    let empty = Map::new();
    let props = feature.properties.as_ref().unwrap_or(&empty);

    let years = number(props, index, "years_of_data")?;
    if years < 0.0 || years.fract() != 0.0 || years > u32::MAX as f64 {
        return Err(DatasetError::InvalidProperty {
            index,
            property: "years_of_data",
            reason: format!("{} is not a whole number of years", years),
        });
    }

    Ok(Station {
        lat,
        lon,
        current_prcp: number(props, index, "current_prcp")?,
        historical_mean: number(props, index, "historical_mean")?,
        years_of_data: years as u32,
        z_score: number(props, index, "z_score")?,
        z_score_raw: number(props, index, "z_score_raw")?,
    })
}

/// GeoJSON positions are `[lon, lat, ...]`.
fn point_coordinates(index: usize, coordinates: &Value) -> Result<(f64, f64)> {
    let position = coordinates
        .as_array()
        .ok_or_else(|| invalid_geometry(index, "coordinates must be an array"))?;
    if position.len() < 2 {
        return Err(invalid_geometry(
            index,
            format!("expected [lon, lat], found {} values", position.len()),
        ));
    }

    let lon = position[0]
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_geometry(index, "longitude is not a number"))?;
    let lat = position[1]
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_geometry(index, "latitude is not a number"))?;

    if !(-180.0..=180.0).contains(&lon) {
        return Err(invalid_geometry(
            index,
            format!("longitude {} out of range", lon),
        ));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(invalid_geometry(
            index,
            format!("latitude {} out of range", lat),
        ));
    }
    Ok((lon, lat))
}

fn number(props: &Map<String, Value>, index: usize, property: &'static str) -> Result<f64> {
    match props.get(property) {
        None | Some(Value::Null) => Err(DatasetError::MissingProperty { index, property }),
        Some(value) => value
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DatasetError::InvalidProperty {
                index,
                property,
                reason: format!("expected a number, found {}", value),
            }),
    }
}

fn invalid_geometry(index: usize, reason: impl Into<String>) -> DatasetError {
    DatasetError::InvalidGeometry {
        index,
        reason: reason.into(),
    }
}

//! Core types, classification and search logic for the drought map.
//!
//! Everything in this crate is platform independent so it compiles both to
//! `wasm32-unknown-unknown` for the Dioxus map app and natively for the CLI:
//! - `classify`: Z-score severity bands, colors, status labels, badge classes
//! - `station`: typed, validated station records loaded from GeoJSON
//! - `popup`: popup markup for a single station
//! - `nearest`: nearest-station lookup in degree space
//! - `marker`: marker styles and per-station marker payloads for the map bridge
//! - `map`: map viewport and basemap configuration
//! - `metadata`: the dataset metadata label shown above the map
//! - `load`: label and marker layer produced by the one-time dataset load
//! - `geocode`: geocoder request/response model (native client behind `api`)
//! - `search`: the location search state machine

pub mod classify;
pub mod error;
pub mod geocode;
pub mod load;
pub mod map;
pub mod marker;
pub mod metadata;
pub mod nearest;
pub mod popup;
pub mod search;
pub mod station;

pub use error::{DatasetError, Result};
pub use station::{Dataset, Metadata, Station};

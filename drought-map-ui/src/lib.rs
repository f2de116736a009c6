//! Shared Dioxus components and Leaflet bridge for the drought map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `web`: browser fetch and timer helpers built on `web-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `loader`: one-time dataset fetch that fills the map
//! - `search`: event handlers driving the location search state machine
//! - `components`: RSX components (map container, search box, metadata, legend)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod search;
pub mod state;
pub mod web;

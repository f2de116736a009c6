/// Error types for the drought data library
use thiserror::Error;

/// Errors raised while loading a drought dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The document is not valid JSON or does not match the GeoJSON shape
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level object is not a FeatureCollection
    #[error("Expected a FeatureCollection, found {0:?}")]
    NotFeatureCollection(String),

    /// Feature geometry is not a usable point
    #[error("Feature {index}: invalid geometry: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    /// A required numeric property is absent
    #[error("Feature {index}: missing property `{property}`")]
    MissingProperty { index: usize, property: &'static str },

    /// A property is present but unusable
    #[error("Feature {index}: invalid value for `{property}`: {reason}")]
    InvalidProperty {
        index: usize,
        property: &'static str,
        reason: String,
    },
}

/// Errors raised while talking to the geocoding service.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The query is too short to be sent
    #[error("Query must be at least {min} characters (got {len})")]
    QueryTooShort { min: usize, len: usize },

    /// The response body could not be decoded
    #[error("Failed to parse geocoder response: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;

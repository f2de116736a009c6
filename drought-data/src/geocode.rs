//! Geocoding request and response model.
//!
//! Location search goes through the Nominatim search endpoint:
//!
//! ```text
//! https://nominatim.openstreetmap.org/search?format=json&q={query}&limit=5
//! ```
//!
//! Nominatim returns an ordered JSON array. Coordinates come back as decimal
//! strings (`"lat": "48.8588897"`), but plain numbers are accepted as well.
//! Candidates whose coordinates cannot be parsed are dropped.
//!
//! The browser app builds the URL itself and fetches it through `web-sys`;
//! the native client below is only compiled with the `api` feature.

use crate::error::GeocodeError;
use serde::Deserialize;
use serde_json::Value;

/// Nominatim search endpoint.
pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 3;

/// Maximum number of candidates requested and shown.
pub const RESULT_LIMIT: usize = 5;

/// One geocoder candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
}

impl SearchResult {
    /// The part of the display name before the first comma.
    pub fn primary_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .unwrap_or(&self.display_name)
            .trim()
    }
}

/// True when a query is long enough to be sent.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// A validated geocoding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    pub query: String,
    pub limit: usize,
}

impl GeocodeRequest {
    /// Build a request, rejecting queries below the minimum length.
    pub fn new(query: &str) -> Result<Self, GeocodeError> {
        if !is_searchable(query) {
            return Err(GeocodeError::QueryTooShort {
                min: MIN_QUERY_CHARS,
                len: query.chars().count(),
            });
        }
        Ok(Self {
            query: query.to_string(),
            limit: RESULT_LIMIT,
        })
    }

    /// Query string parameters, unencoded.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("format", "json".to_string()),
            ("q", self.query.clone()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Full request URL using the supplied percent-encoder for values.
    pub fn url_with(&self, encode: impl Fn(&str) -> String) -> String {
        let query = self
            .params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", NOMINATIM_SEARCH_URL, query)
    }
}

#[derive(Deserialize)]
struct RawCandidate {
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    lat: Value,
    #[serde(default)]
    lon: Value,
}

fn coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Decode a geocoder response body, keeping at most `RESULT_LIMIT` results.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>, GeocodeError> {
    let candidates: Vec<RawCandidate> = serde_json::from_str(body)?;
    let results = candidates
        .into_iter()
        .filter_map(|c| {
            let lat = coordinate(&c.lat)?;
            let lon = coordinate(&c.lon)?;
            Some(SearchResult {
                display_name: c.display_name,
                lat,
                lon,
            })
        })
        .take(RESULT_LIMIT)
        .collect();
    Ok(results)
}

#[cfg(feature = "api")]
pub use client::GeocodeClient;

#[cfg(feature = "api")]
mod client {
    use super::{parse_response, GeocodeRequest, SearchResult, NOMINATIM_SEARCH_URL};
    use crate::error::GeocodeError;
    use log::info;
    use reqwest::header::USER_AGENT;
    use reqwest::Client;

    /// Native Nominatim client used by the CLI.
    #[derive(Clone, Debug)]
    pub struct GeocodeClient {
        client: Client,
        user_agent: String,
    }

    impl GeocodeClient {
        /// Nominatim's usage policy asks for an identifying user agent.
        pub fn new(user_agent: &str) -> Self {
            Self {
                client: Client::new(),
                user_agent: user_agent.to_string(),
            }
        }

        pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
            let request = GeocodeRequest::new(query)?;
            info!("Geocoding {:?}", request.query);
            let body = self
                .client
                .get(NOMINATIM_SEARCH_URL)
                .query(&request.params())
                .header(USER_AGENT, &self.user_agent)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            parse_response(&body)
        }
    }
}

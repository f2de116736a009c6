//! Geocoder probe using the same request/response handling as the map.

use drought_data::geocode::{GeocodeClient, SearchResult};
use log::warn;

/// Query Nominatim and print up to five results.
pub async fn run_geocode(query: &str, user_agent: &str) -> anyhow::Result<()> {
    let client = GeocodeClient::new(user_agent);
    let results = client.search(query).await?;
    if results.is_empty() {
        warn!("No results for {:?}", query);
    }
    println!("{}", format_results(&results));
    Ok(())
}

/// Result rows as the search dropdown shows them: primary name, then the full
/// display name and coordinate.
pub fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results found".to_string();
    }
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. {}\n   {} ({:.4}, {:.4})",
                i + 1,
                r.primary_name(),
                r.display_name,
                r.lat,
                r.lon
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_results() {
        let results = vec![SearchResult {
            display_name: "Lima, Peru".to_string(),
            lat: -12.0621065,
            lon: -77.0365256,
        }];
        assert_eq!(
            format_results(&results),
            "1. Lima\n   Lima, Peru (-12.0621, -77.0365)"
        );
        assert_eq!(format_results(&[]), "No results found");
    }
}

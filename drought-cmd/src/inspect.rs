//! Dataset checks: validation summary, classification and nearest station.

use anyhow::Context;
use drought_data::classify::{Badge, Severity};
use drought_data::metadata::MetadataLabel;
use drought_data::nearest::{degree_distance, nearest_station};
use drought_data::popup::to_fixed;
use drought_data::{Dataset, Station};
use log::info;

/// Read and validate a dataset file.
pub async fn load_dataset(path: &str) -> anyhow::Result<Dataset> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    let dataset =
        Dataset::from_geojson(&contents).with_context(|| format!("Invalid dataset {}", path))?;
    info!("Validated {} stations from {}", dataset.len(), path);
    Ok(dataset)
}

/// Validate a dataset and print a summary.
pub async fn run_check(path: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(path).await?;
    println!("{}", summarize(&dataset));
    Ok(())
}

/// Print the station nearest to `(lat, lon)`.
pub async fn run_nearest(path: &str, lat: f64, lon: f64) -> anyhow::Result<()> {
    let dataset = load_dataset(path).await?;
    let (index, station) = nearest_station(&dataset.stations, lat, lon)
        .with_context(|| format!("{} has no stations", path))?;
    println!("{}", describe_nearest(index, station, lat, lon));
    Ok(())
}

/// Multi-line summary: station count, metadata and per-band counts.
pub fn summarize(dataset: &Dataset) -> String {
    let mut lines = vec![format!("Stations: {}", dataset.len())];

    let label = MetadataLabel::loaded(dataset.metadata.as_ref());
    if dataset.metadata.is_some() {
        lines.push(format!("Date range: {}", label.text()));
    } else {
        lines.push("Date range: (no metadata)".to_string());
    }

    for (band, count) in dataset.severity_counts() {
        lines.push(format!(
            "  {:<24} {:>7} {:>6}",
            band.status(),
            band.color(),
            count
        ));
    }
    lines.join("\n")
}

/// One-line classification of a Z-score.
pub fn describe_z_score(z_score: f64) -> String {
    let band = Severity::from_z_score(z_score);
    format!(
        "{:.2}: {:?} ({}) color={} badge={}",
        z_score,
        band,
        band.status(),
        band.color(),
        Badge::from_z_score(z_score).class()
    )
}

fn describe_nearest(index: usize, station: &Station, lat: f64, lon: f64) -> String {
    format!(
        "Station #{} at {}, {} ({:.2} degrees away)\n  {}\n  Z-score {:.2} (raw {}), {} cm vs {} cm historical, {} years",
        index,
        to_fixed(station.lat, 2),
        to_fixed(station.lon, 2),
        degree_distance(lat, lon, station.lat, station.lon),
        station.severity().status(),
        station.z_score,
        to_fixed(station.z_score_raw, 2),
        to_fixed(station.current_prcp, 1),
        to_fixed(station.historical_mean, 1),
        station.years_of_data
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use drought_data::Metadata;

    fn station(lat: f64, lon: f64, z_score: f64) -> Station {
        Station {
            lat,
            lon,
            current_prcp: 3.0,
            historical_mean: 4.5,
            years_of_data: 40,
            z_score,
            z_score_raw: z_score - 0.1,
        }
    }

    #[test]
    fn test_summarize_counts_bands() {
        let dataset = Dataset {
            stations: vec![station(0.0, 0.0, -2.5), station(1.0, 1.0, 0.2), station(2.0, 2.0, 0.3)],
            metadata: Some(Metadata {
                date_range: "Sep 15 - Oct 15, 2026".to_string(),
                is_sample: true,
            }),
        };
        let summary = summarize(&dataset);
        assert!(summary.starts_with("Stations: 3"));
        assert!(summary.contains("Date range: Sep 15 - Oct 15, 2026 (SAMPLE DATA)"));
        let near_normal = summary
            .lines()
            .find(|l| l.contains("Near Normal"))
            .unwrap();
        assert!(near_normal.trim_end().ends_with('2'));
    }

    #[test]
    fn test_summarize_without_metadata() {
        let summary = summarize(&Dataset::default());
        assert!(summary.contains("Stations: 0"));
        assert!(summary.contains("(no metadata)"));
        assert_eq!(summary.lines().count(), 9);
    }

    #[test]
    fn test_describe_z_score() {
        let line = describe_z_score(-0.5);
        assert!(line.contains("SlightlyDrier"));
        assert!(line.contains("badge=normal"));
        assert!(describe_z_score(2.5).contains("color=#67a9cf"));
    }

    #[test]
    fn test_describe_nearest() {
        let s = station(5.0, 5.0, -1.5);
        let text = describe_nearest(2, &s, 4.0, 4.0);
        assert!(text.starts_with("Station #2 at 5.00, 5.00 (1.41 degrees away)"));
        assert!(text.contains("Drier than Normal"));
        assert!(text.contains("40 years"));

        let tie = Station {
            current_prcp: 10.25,
            ..station(38.125, 0.0, 0.0)
        };
        let text = describe_nearest(0, &tie, 38.0, 0.0);
        assert!(text.contains("at 38.13, 0.00"));
        assert!(text.contains("10.3 cm vs 4.5 cm"));
    }
}

//! Command implementations for the drought map CLI.
//!
//! Provides subcommands for validating the drought dataset asset, checking
//! classification and nearest-station lookups against it, and probing the
//! geocoder used by the map's search box.

use clap::Subcommand;

pub mod geocode;
pub mod inspect;

#[derive(Subcommand)]
pub enum Command {
    /// Validate a drought GeoJSON file and summarize it
    Check {
        /// Path to the dataset (e.g. data/drought_data.geojson)
        path: String,
    },

    /// Show the severity band, color, status and badge for a Z-score
    Classify {
        #[arg(allow_negative_numbers = true)]
        z_score: f64,
    },

    /// Find the station nearest to a coordinate
    Nearest {
        /// Path to the dataset
        path: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Look up a place name with the Nominatim geocoder
    Geocode {
        /// Free-text place name (at least 3 characters)
        query: String,

        /// User agent sent to Nominatim
        #[arg(long, default_value = "drought-cli")]
        user_agent: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check { path } => inspect::run_check(&path).await,
        Command::Classify { z_score } => {
            println!("{}", inspect::describe_z_score(z_score));
            Ok(())
        }
        Command::Nearest { path, lat, lon } => inspect::run_nearest(&path, lat, lon).await,
        Command::Geocode { query, user_agent } => geocode::run_geocode(&query, &user_agent).await,
    }
}

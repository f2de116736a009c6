//! Nearest-station lookup.
//!
//! Distance is straight-line Euclidean distance in degree space, not
//! geodesic distance. Longitude convergence and the antimeridian are ignored.

use crate::station::Station;

/// Euclidean distance between two (lat, lon) points, in degrees.
pub fn degree_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = lat_a - lat_b;
    let d_lon = lon_a - lon_b;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Index and reference of the station closest to `(lat, lon)`.
///
/// Returns `None` for an empty slice. On ties the earliest station wins.
pub fn nearest_station(stations: &[Station], lat: f64, lon: f64) -> Option<(usize, &Station)> {
    let mut best: Option<(usize, &Station, f64)> = None;
    for (index, station) in stations.iter().enumerate() {
        let distance = degree_distance(lat, lon, station.lat, station.lon);
        match best {
            Some((_, _, min)) if distance >= min => {}
            _ => best = Some((index, station, distance)),
        }
    }
    best.map(|(index, station, _)| (index, station))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::tests::station;

    #[test]
    fn test_picks_closest_station() {
        let stations = vec![
            station(0.0, 0.0, 0.0),
            station(10.0, 10.0, 0.0),
            station(5.0, 5.0, 0.0),
        ];
        let (index, nearest) = nearest_station(&stations, 4.0, 4.0).unwrap();
        assert_eq!(index, 2);
        assert!((nearest.lat - 5.0).abs() < f64::EPSILON);
        assert!((nearest.lon - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distances() {
        assert!((degree_distance(4.0, 4.0, 5.0, 5.0) - 1.414).abs() < 1e-3);
        assert!((degree_distance(4.0, 4.0, 0.0, 0.0) - 5.657).abs() < 1e-3);
        assert!((degree_distance(4.0, 4.0, 10.0, 10.0) - 8.485).abs() < 1e-3);
    }

    #[test]
    fn test_empty_and_ties() {
        assert!(nearest_station(&[], 0.0, 0.0).is_none());

        let stations = vec![station(1.0, 0.0, 0.0), station(-1.0, 0.0, 0.0)];
        let (index, _) = nearest_station(&stations, 0.0, 0.0).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_degree_space_ignores_antimeridian() {
        // 179 and -179 are 2 degrees apart on the globe but 358 in degree space
        let stations = vec![station(0.0, -179.0, 0.0), station(0.0, 170.0, 0.0)];
        let (index, _) = nearest_station(&stations, 0.0, 179.0).unwrap();
        assert_eq!(index, 1);
    }
}

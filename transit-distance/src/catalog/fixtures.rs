//! Test datasets shared by the unit tests of several modules.

use std::collections::BTreeMap;

use super::dataset::{CoordinatesDto, Dataset, StationDto};
use super::store::StationCatalog;

/// Pinned Berlin network: U1, U2, U6, U7, U9 (partial) and S7.
pub const BERLIN_JSON: &str = include_str!("../../data/stations_and_lines.json");

/// The pinned Berlin catalog.
pub fn berlin() -> StationCatalog {
    StationCatalog::from_json_str(BERLIN_JSON).unwrap()
}

/// Build a consistent synthetic dataset from line definitions.
///
/// Stations are placed about 5.5 km apart along a meridian, in id order, so
/// no pair falls under the proximity threshold.
pub fn dataset(lines: &[(&str, &[&str])]) -> Dataset {
    let mut memberships: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (line, stations) in lines {
        for station in *stations {
            let claims = memberships.entry(station.to_string()).or_default();
            if !claims.iter().any(|l| l == line) {
                claims.push(line.to_string());
            }
        }
    }

    let stations = memberships
        .into_iter()
        .enumerate()
        .map(|(i, (id, lines))| {
            let dto = StationDto {
                name: format!("Station {id}"),
                coordinates: CoordinatesDto {
                    latitude: 40.0 + i as f64 * 0.05,
                    longitude: 10.0,
                },
                lines,
            };
            (id, dto)
        })
        .collect();

    let lines = lines
        .iter()
        .map(|(line, stations)| {
            (
                line.to_string(),
                stations.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect();

    Dataset { stations, lines }
}

/// Build a validated synthetic catalog from line definitions.
pub fn synthetic(lines: &[(&str, &[&str])]) -> StationCatalog {
    StationCatalog::from_dataset(dataset(lines)).unwrap()
}

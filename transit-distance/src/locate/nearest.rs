//! Resolve a raw position to the closest known station.

use crate::catalog::StationCatalog;
use crate::domain::{Coordinates, StationId};

use super::haversine::haversine_km;

/// Default radius within which a position counts as "at the station".
pub const DEFAULT_AT_STATION_RADIUS_M: f64 = 10.0;

/// Maps coordinates to the nearest station of a catalog.
#[derive(Debug, Clone, Copy)]
pub struct NearestStationLocator<'c> {
    catalog: &'c StationCatalog,
    at_station_radius_km: f64,
    served_only: bool,
}

impl<'c> NearestStationLocator<'c> {
    /// Create a locator with the default 10 m at-station radius.
    pub fn new(catalog: &'c StationCatalog) -> Self {
        Self::with_radius_m(catalog, DEFAULT_AT_STATION_RADIUS_M)
    }

    /// Create a locator with a custom at-station radius in metres.
    pub fn with_radius_m(catalog: &'c StationCatalog, radius_m: f64) -> Self {
        Self {
            catalog,
            at_station_radius_km: radius_m / 1000.0,
            served_only: false,
        }
    }

    /// Ignore stations that belong to no line.
    pub fn served_only(self) -> Self {
        Self {
            served_only: true,
            ..self
        }
    }

    /// The station closest to `point`, or `None` when there is no candidate.
    ///
    /// Stations are scanned in id order. The first station within the
    /// at-station radius is returned immediately; sub-radius offsets are
    /// GPS noise, not a different location. Otherwise the minimum distance
    /// wins, and exact ties go to the lexicographically smaller id.
    pub fn locate(&self, point: Coordinates) -> Option<&'c StationId> {
        let mut best: Option<(&'c StationId, f64)> = None;

        let candidates = self
            .catalog
            .all_stations()
            .values()
            .filter(|s| !self.served_only || s.is_served());

        for station in candidates {
            let distance = haversine_km(point, station.coordinates);
            if distance < self.at_station_radius_km {
                return Some(&station.id);
            }
            // Strictly less: on a tie the earlier (smaller) id is kept
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((&station.id, distance));
            }
        }

        best.map(|(id, _)| id)
    }
}

//! Distance query configuration.

use crate::locate::DEFAULT_AT_STATION_RADIUS_M;

/// Tunable thresholds for distance queries.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceConfig {
    /// A position within this many metres of a station is treated as
    /// standing at that station.
    pub at_station_radius_m: f64,

    /// Stations closer than this (straight line, km) are reported as one
    /// stop apart without searching the graph.
    pub proximity_threshold_km: f64,
}

impl DistanceConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(at_station_radius_m: f64, proximity_threshold_km: f64) -> Self {
        Self {
            at_station_radius_m,
            proximity_threshold_km,
        }
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            at_station_radius_m: DEFAULT_AT_STATION_RADIUS_M,
            proximity_threshold_km: 1.0,
        }
    }
}

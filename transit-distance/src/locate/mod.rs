//! Position-to-station resolution.
//!
//! Great-circle distance and nearest-station lookup for queries that give
//! a raw GPS position instead of a station id.

mod haversine;
mod nearest;

pub use haversine::{EARTH_RADIUS_KM, haversine_km};
pub use nearest::{DEFAULT_AT_STATION_RADIUS_M, NearestStationLocator};

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{HopCount, Line, Station};

/// Request to list or search stations.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchRequest {
    /// Name fragment; when absent every station is listed
    pub q: Option<String>,

    /// Maximum number of search results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub lines: Vec<String>,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            latitude: station.coordinates.latitude(),
            longitude: station.coordinates.longitude(),
            lines: station.lines.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Response to a station listing or search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A line and its stations in travel order.
#[derive(Debug, Serialize, PartialEq)]
pub struct LineResult {
    pub id: String,
    pub stations: Vec<String>,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            stations: line.stations.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LineListResponse {
    pub lines: Vec<LineResult>,
}

/// Request for the distance between an inspector report and a user.
///
/// The user is given either as a station id or as a position. When both
/// are present the station id wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceRequest {
    pub inspector_station_id: Option<String>,
    pub user_station_id: Option<String>,
    pub user_lat: Option<f64>,
    pub user_lon: Option<f64>,
}

/// Number of stops between inspector and user; `-1` when unreachable.
#[derive(Debug, Serialize, PartialEq)]
pub struct DistanceResponse {
    pub distance: i64,
}

impl From<HopCount> for DistanceResponse {
    fn from(hops: HopCount) -> Self {
        Self {
            distance: hops.as_sentinel(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_request_uses_camel_case() {
        let req: DistanceRequest = serde_json::from_str(
            r#"{"inspectorStationId":"U-RP","userLat":52.5,"userLon":13.4}"#,
        )
        .unwrap();

        assert_eq!(req.inspector_station_id.as_deref(), Some("U-RP"));
        assert_eq!(req.user_station_id, None);
        assert_eq!(req.user_lat, Some(52.5));
        assert_eq!(req.user_lon, Some(13.4));
    }

    #[test]
    fn unreachable_serializes_as_minus_one() {
        let json = serde_json::to_string(&DistanceResponse::from(HopCount::Unreachable)).unwrap();
        assert_eq!(json, r#"{"distance":-1}"#);

        let json = serde_json::to_string(&DistanceResponse::from(HopCount::Hops(8))).unwrap();
        assert_eq!(json, r#"{"distance":8}"#);
    }
}

//! Distance queries: validation, short-circuits, and dispatch to the search.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::catalog::StationCatalog;
use crate::domain::{Coordinates, HopCount, InvalidCoordinates, Station, StationId};
use crate::graph::{AdjacencyError, SearchError, ShortestPathEngine};
use crate::locate::{NearestStationLocator, haversine_km};

use super::config::DistanceConfig;

/// Errors from a distance query.
///
/// An unreachable target is not an error; see `HopCount::Unreachable`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A supplied station id is not in the catalog
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// The station exists but belongs to no line, so it is not in the graph
    #[error("station {0} is not served by any line")]
    StationNotOnAnyLine(StationId),

    /// The supplied position is not a valid coordinate pair
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// The dataset is inconsistent
    #[error(transparent)]
    DataIntegrity(AdjacencyError),

    /// An internal invariant was violated during the search
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SearchError> for QueryError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Adjacency(AdjacencyError::UnknownStation(id)) => {
                QueryError::UnknownStation(id.to_string())
            }
            SearchError::Adjacency(integrity @ AdjacencyError::DataIntegrity { .. }) => {
                error!(error = %integrity, "dataset integrity violation during search");
                QueryError::DataIntegrity(integrity)
            }
            overflow @ SearchError::DistanceOverflow { .. } => {
                error!(error = %overflow, "search invariant violated");
                QueryError::Internal(overflow.to_string())
            }
        }
    }
}

/// Where a query measures to.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTarget {
    Station(StationId),
    Position(Coordinates),
}

/// A single distance request. Built per request and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceQuery {
    pub source: StationId,
    pub target: QueryTarget,
}

impl DistanceQuery {
    /// Query between two raw station ids.
    pub fn between(source: &str, target: &str) -> Result<Self, QueryError> {
        Ok(Self {
            source: parse_known(source)?,
            target: QueryTarget::Station(parse_known(target)?),
        })
    }

    /// Query from a raw station id to a raw position.
    pub fn to_position(source: &str, latitude: f64, longitude: f64) -> Result<Self, QueryError> {
        Ok(Self {
            source: parse_known(source)?,
            target: QueryTarget::Position(Coordinates::new(latitude, longitude)?),
        })
    }
}

/// A malformed id can never name a catalog station.
fn parse_known(raw: &str) -> Result<StationId, QueryError> {
    StationId::parse(raw).map_err(|_| QueryError::UnknownStation(raw.to_string()))
}

/// Answers "how many stops apart" over a shared, read-only catalog.
///
/// Cheap to clone; every clone shares the same catalog. Each query owns its
/// own search state, so concurrent queries need no locking.
#[derive(Debug, Clone)]
pub struct DistanceQueryService {
    catalog: Arc<StationCatalog>,
    config: DistanceConfig,
}

impl DistanceQueryService {
    pub fn new(catalog: Arc<StationCatalog>, config: DistanceConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog queries are answered from.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// Hop count between two stations given by raw id.
    pub fn get_distance(&self, source: &str, target: &str) -> Result<HopCount, QueryError> {
        self.execute(&DistanceQuery::between(source, target)?)
    }

    /// Hop count from a station to the station nearest a raw position.
    pub fn get_distance_to_position(
        &self,
        source: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<HopCount, QueryError> {
        self.execute(&DistanceQuery::to_position(source, latitude, longitude)?)
    }

    /// Run a query.
    ///
    /// Both endpoints are resolved and validated before any search starts.
    /// Identical endpoints answer 0, endpoints closer than the proximity
    /// threshold answer 1, anything else goes to the shortest path engine.
    pub fn execute(&self, query: &DistanceQuery) -> Result<HopCount, QueryError> {
        let catalog = self.catalog.as_ref();
        let source = self.resolve_served(&query.source)?;
        let target = match &query.target {
            QueryTarget::Station(id) => self.resolve_served(id)?,
            QueryTarget::Position(point) => {
                // Stations on no line are outside the graph
                let locator =
                    NearestStationLocator::with_radius_m(catalog, self.config.at_station_radius_m)
                        .served_only();
                // The source resolved above as served, so there is a candidate
                let id = locator.locate(*point).ok_or_else(|| {
                    QueryError::Internal("no station to resolve position against".into())
                })?;
                debug!(position = %point, station = %id, "resolved position to station");
                self.resolve_served(id)?
            }
        };

        if source.id == target.id {
            return Ok(HopCount::Hops(0));
        }

        let straight_line_km = haversine_km(source.coordinates, target.coordinates);
        if straight_line_km < self.config.proximity_threshold_km {
            debug!(
                source = %source.id,
                target = %target.id,
                straight_line_km,
                "stations within proximity threshold"
            );
            return Ok(HopCount::Hops(1));
        }

        let result = ShortestPathEngine::new(catalog).distance(&source.id, &target.id)?;

        match result {
            HopCount::Hops(hops) => {
                debug!(source = %source.id, target = %target.id, hops, "distance computed");
            }
            HopCount::Unreachable => {
                warn!(source = %source.id, target = %target.id, "no path between stations");
            }
        }

        Ok(result)
    }

    /// Look up a station and check it is part of the graph.
    fn resolve_served(&self, id: &StationId) -> Result<&Station, QueryError> {
        let station = self
            .catalog
            .station(id.as_str())
            .ok_or_else(|| QueryError::UnknownStation(id.to_string()))?;
        if !station.is_served() {
            return Err(QueryError::StationNotOnAnyLine(station.id.clone()));
        }
        Ok(station)
    }
}

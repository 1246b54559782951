//! Neighbor lookup over the implicit station graph.
//!
//! The graph is never materialised as an edge list. A station's neighbors
//! are its immediate predecessor and successor on every line it belongs to,
//! computed on demand from the catalog.

use std::collections::BTreeSet;

use tracing::error;

use crate::catalog::StationCatalog;
use crate::domain::{LineId, StationId};

/// Errors from neighbor resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdjacencyError {
    /// The station id is not in the catalog
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Station and line disagree about membership (corrupt dataset)
    #[error("data integrity: station {station} claims line {line}, but the line does not list it")]
    DataIntegrity { station: StationId, line: LineId },
}

/// Computes graph neighbors from the per-line station orderings.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyResolver<'c> {
    catalog: &'c StationCatalog,
}

impl<'c> AdjacencyResolver<'c> {
    pub fn new(catalog: &'c StationCatalog) -> Self {
        Self { catalog }
    }

    /// Neighbors of `station`, deduplicated and in id order.
    ///
    /// A neighbor reachable over several lines appears once. Returned ids
    /// borrow from the catalog.
    pub fn neighbors(&self, station: &StationId) -> Result<Vec<&'c StationId>, AdjacencyError> {
        let Some(record) = self.catalog.station(station.as_str()) else {
            return Err(AdjacencyError::UnknownStation(station.clone()));
        };

        let mut neighbors = BTreeSet::new();
        for line_id in &record.lines {
            let position = self
                .catalog
                .line(line_id.as_str())
                .and_then(|line| line.position(station).map(|idx| (line, idx)));

            let Some((line, idx)) = position else {
                error!(
                    station = %station,
                    line = %line_id,
                    "station claims a line that does not list it"
                );
                return Err(AdjacencyError::DataIntegrity {
                    station: station.clone(),
                    line: line_id.clone(),
                });
            };

            let (before, after) = line.neighbors_at(idx);
            neighbors.extend(before);
            neighbors.extend(after);
        }

        Ok(neighbors.into_iter().collect())
    }
}

//! Hop-count shortest path search.
//!
//! Every edge currently weighs one hop, so this is breadth-first search in
//! effect. It keeps the Dijkstra shape (priority frontier, relaxation,
//! overflow guard) so that weighted edges such as line-change penalties can
//! be introduced by changing [`HOP_WEIGHT`] handling alone.
//!
//! The frontier is a binary min-heap with lazy deletion: improving a
//! station's distance pushes a fresh entry and leaves the old one in place.
//! A stale entry always carries a larger distance than the recorded one, so
//! it is skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{error, trace};

use crate::catalog::StationCatalog;
use crate::domain::{HopCount, StationId};

use super::adjacency::{AdjacencyError, AdjacencyResolver};

/// Cost of travelling between two adjacent stations.
pub const HOP_WEIGHT: u32 = 1;

/// Distance sentinel for stations not reached yet.
const INFINITY: u32 = u32::MAX;

/// Errors from the search. Unreachability is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Neighbor resolution failed
    #[error(transparent)]
    Adjacency(#[from] AdjacencyError),

    /// Accumulated distance left the representable range
    #[error("distance overflow while relaxing edges from {station}")]
    DistanceOverflow { station: StationId },
}

/// Distance one hop further on, or `None` if it would reach the sentinel.
fn relax(distance: u32) -> Option<u32> {
    distance
        .checked_add(HOP_WEIGHT)
        .filter(|d| *d < INFINITY)
}

/// A pending frontier entry.
///
/// Ordered so that `BinaryHeap` pops the smallest distance first, and among
/// equal distances the earliest pushed entry first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry<'c> {
    distance: u32,
    seq: u64,
    station: &'c StationId,
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-query working state. Owned by a single search and dropped after it.
struct SearchState<'c> {
    distances: HashMap<&'c StationId, u32>,
    frontier: BinaryHeap<FrontierEntry<'c>>,
    visited: HashSet<&'c StationId>,
    next_seq: u64,
}

impl<'c> SearchState<'c> {
    fn with_capacity(n: usize) -> Self {
        Self {
            distances: HashMap::with_capacity(n),
            frontier: BinaryHeap::with_capacity(n),
            visited: HashSet::with_capacity(n),
            next_seq: 0,
        }
    }

    fn push(&mut self, station: &'c StationId, distance: u32) {
        self.frontier.push(FrontierEntry {
            distance,
            seq: self.next_seq,
            station,
        });
        self.next_seq += 1;
    }

    fn recorded(&self, station: &StationId) -> u32 {
        self.distances.get(station).copied().unwrap_or(INFINITY)
    }
}

/// Computes hop-count distances between stations of one catalog.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'c> {
    catalog: &'c StationCatalog,
    adjacency: AdjacencyResolver<'c>,
}

impl<'c> ShortestPathEngine<'c> {
    pub fn new(catalog: &'c StationCatalog) -> Self {
        Self {
            catalog,
            adjacency: AdjacencyResolver::new(catalog),
        }
    }

    /// Hop count of the shortest path from `source` to `target`.
    ///
    /// Returns `HopCount::Unreachable` when no path exists, including when
    /// either endpoint belongs to no line. Callers are expected to have
    /// handled `source == target` already; the search still answers 0 for
    /// it.
    ///
    /// # Errors
    ///
    /// - `Adjacency(UnknownStation)` if an endpoint is not in the catalog
    /// - `Adjacency(DataIntegrity)` if the dataset is inconsistent
    /// - `DistanceOverflow` if relaxation leaves the representable range
    pub fn distance(
        &self,
        source: &StationId,
        target: &StationId,
    ) -> Result<HopCount, SearchError> {
        let stations = self.catalog.all_stations();
        let Some((source_key, _)) = stations.get_key_value(source) else {
            return Err(AdjacencyError::UnknownStation(source.clone()).into());
        };
        let Some((target_key, _)) = stations.get_key_value(target) else {
            return Err(AdjacencyError::UnknownStation(target.clone()).into());
        };

        let mut state = SearchState::with_capacity(stations.len());

        // Seed with every served station, in id order. Stations without a
        // line are never enqueued and so can never be reached.
        for station in stations.values().filter(|s| s.is_served()) {
            let initial = if &station.id == source_key { 0 } else { INFINITY };
            state.distances.insert(&station.id, initial);
            state.push(&station.id, initial);
        }

        while let Some(entry) = state.frontier.pop() {
            if entry.distance == INFINITY {
                // Everything left on the frontier is unreachable
                break;
            }
            if state.visited.contains(entry.station)
                || entry.distance > state.recorded(entry.station)
            {
                continue;
            }
            if entry.station == target_key {
                break;
            }

            state.visited.insert(entry.station);
            trace!(
                station = %entry.station,
                distance = entry.distance,
                "expanding station"
            );

            for neighbor in self.adjacency.neighbors(entry.station)? {
                let Some(candidate) = relax(entry.distance) else {
                    error!(
                        station = %entry.station,
                        distance = entry.distance,
                        "distance overflow during relaxation"
                    );
                    return Err(SearchError::DistanceOverflow {
                        station: entry.station.clone(),
                    });
                };

                if candidate < state.recorded(neighbor) {
                    state.distances.insert(neighbor, candidate);
                    state.push(neighbor, candidate);
                }
            }
        }

        Ok(match state.recorded(target_key) {
            INFINITY => HopCount::Unreachable,
            hops => HopCount::Hops(hops),
        })
    }
}

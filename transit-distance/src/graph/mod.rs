//! Implicit station graph and hop-count search.
//!
//! Edges are derived on demand from line orderings; nothing is materialised
//! beyond the per-query search state.

mod adjacency;
mod dijkstra;

pub use adjacency::{AdjacencyError, AdjacencyResolver};
pub use dijkstra::{HOP_WEIGHT, SearchError, ShortestPathEngine};

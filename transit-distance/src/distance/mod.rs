//! Distance queries between stations.
//!
//! This module answers "how many stops away is that?": it resolves the
//! endpoints (station ids or a GPS position), applies the identity and
//! proximity short-circuits, and otherwise runs the hop-count search.

mod config;
mod query;


pub use config::DistanceConfig;
pub use query::{DistanceQuery, DistanceQueryService, QueryError, QueryTarget};

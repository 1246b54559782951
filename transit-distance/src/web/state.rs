//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::StationCatalog;
use crate::distance::{DistanceConfig, DistanceQueryService};

/// Shared application state.
///
/// The catalog is loaded once at start-up and never mutated, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Station and line data
    pub catalog: Arc<StationCatalog>,

    /// Distance queries over the same catalog
    pub service: DistanceQueryService,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: StationCatalog, config: DistanceConfig) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            service: DistanceQueryService::new(Arc::clone(&catalog), config),
            catalog,
        }
    }
}

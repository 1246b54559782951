//! Station and line catalog.
//!
//! Loads the static station/line dataset once at start-up, validates it,
//! and exposes it as an immutable in-memory view.

mod dataset;
mod error;
mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::{CoordinatesDto, Dataset, StationDto};
pub use error::CatalogError;
pub use store::StationCatalog;

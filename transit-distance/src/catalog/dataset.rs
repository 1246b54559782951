//! Raw dataset format.
//!
//! The dataset is a single JSON document mapping station ids to station
//! records and line ids to ordered station sequences. Nothing here is
//! validated; `StationCatalog::from_dataset` does that.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;

/// Coordinates as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoordinatesDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Station record as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationDto {
    pub name: String,
    pub coordinates: CoordinatesDto,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// The full station/line dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    pub stations: BTreeMap<String, StationDto>,
    pub lines: BTreeMap<String, Vec<String>>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

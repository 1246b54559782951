//! The validated, read-only station catalog.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Coordinates, Line, LineId, Station, StationId};

use super::dataset::Dataset;
use super::error::CatalogError;

/// Read-only view of every station and line in the network.
///
/// Built once at start-up and shared by reference between all queries.
/// There is no mutation API, so concurrent reads need no locking.
///
/// Maps are ordered by id, which gives every scan over the catalog a
/// deterministic order.
///
/// # Invariants
///
/// - Every station listed by a line exists in `stations`.
/// - A station claims a line if and only if that line lists it.
/// - No line lists a station twice.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
}

impl StationCatalog {
    /// Load and validate a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_dataset(Dataset::from_path(path)?)
    }

    /// Parse and validate a dataset held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::from_dataset(Dataset::from_json_str(json)?)
    }

    /// Validate a raw dataset and build the catalog.
    ///
    /// Fails on the first inconsistency found. Lines are checked before
    /// stations, each in id order, so the reported error is reproducible.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, CatalogError> {
        let Dataset {
            stations: raw_stations,
            lines: raw_lines,
        } = dataset;

        let mut lines = BTreeMap::new();
        for (raw_line, raw_members) in raw_lines {
            let line_id = LineId::parse(&raw_line).map_err(|source| CatalogError::InvalidLineId {
                raw: raw_line.clone(),
                source,
            })?;

            let mut seen = HashSet::with_capacity(raw_members.len());
            let mut members = Vec::with_capacity(raw_members.len());
            for raw in raw_members {
                let station = parse_station_id(&raw)?;
                if !raw_stations.contains_key(&raw) {
                    return Err(CatalogError::UnknownStationInLine {
                        line: line_id,
                        station,
                    });
                }
                if !seen.insert(raw) {
                    return Err(CatalogError::DuplicateStationInLine {
                        line: line_id,
                        station,
                    });
                }
                members.push(station);
            }

            lines.insert(
                line_id.clone(),
                Line {
                    id: line_id,
                    stations: members,
                },
            );
        }

        let mut stations = BTreeMap::new();
        for (raw_id, dto) in raw_stations {
            let id = parse_station_id(&raw_id)?;
            let coordinates = Coordinates::new(dto.coordinates.latitude, dto.coordinates.longitude)
                .map_err(|source| CatalogError::InvalidCoordinates {
                    station: id.clone(),
                    source,
                })?;

            let mut station_lines: Vec<LineId> = Vec::with_capacity(dto.lines.len());
            for raw_line in &dto.lines {
                let line_id =
                    LineId::parse(raw_line).map_err(|source| CatalogError::InvalidLineId {
                        raw: raw_line.clone(),
                        source,
                    })?;
                let Some(line) = lines.get(&line_id) else {
                    return Err(CatalogError::UnknownLine {
                        station: id,
                        line: line_id,
                    });
                };
                if line.position(&id).is_none() {
                    return Err(CatalogError::MembershipNotListed {
                        station: id,
                        line: line_id,
                    });
                }
                if !station_lines.contains(&line_id) {
                    station_lines.push(line_id);
                }
            }

            stations.insert(
                id.clone(),
                Station {
                    id,
                    name: dto.name,
                    coordinates,
                    lines: station_lines,
                },
            );
        }

        for line in lines.values() {
            for member in &line.stations {
                // Members were checked to exist above
                let claims = stations
                    .get(member)
                    .is_some_and(|s: &Station| s.lines.contains(&line.id));
                if !claims {
                    return Err(CatalogError::MembershipNotClaimed {
                        line: line.id.clone(),
                        station: member.clone(),
                    });
                }
            }
        }

        let catalog = Self { stations, lines };
        let unserved = catalog.stations.values().filter(|s| !s.is_served()).count();
        if unserved > 0 {
            debug!(unserved, "stations without any line are excluded from search");
        }
        info!(
            stations = catalog.len(),
            lines = catalog.line_count(),
            "station catalog loaded"
        );

        Ok(catalog)
    }

    /// Assemble a catalog without validation, for exercising integrity checks.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        Self {
            stations: stations.into_iter().map(|s| (s.id.clone(), s)).collect(),
            lines: lines.into_iter().map(|l| (l.id.clone(), l)).collect(),
        }
    }

    /// All stations, keyed by id.
    pub fn all_stations(&self) -> &BTreeMap<StationId, Station> {
        &self.stations
    }

    /// All lines, keyed by id.
    pub fn all_lines(&self) -> &BTreeMap<LineId, Line> {
        &self.lines
    }

    /// Look up a station by raw id.
    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Look up a line by raw id.
    pub fn line(&self, id: &str) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Search stations by name, case-insensitively.
    ///
    /// Names starting with the query rank before names merely containing
    /// it; within each group results are ordered by name, then id.
    pub fn search_by_name(&self, query: &str, limit: usize) -> Vec<&Station> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, &Station)> = self
            .stations
            .values()
            .filter_map(|station| {
                let name = station.name.to_lowercase();
                if name.starts_with(&needle) {
                    Some((false, station))
                } else if name.contains(&needle) {
                    Some((true, station))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|(a_inner, a), (b_inner, b)| {
            a_inner
                .cmp(b_inner)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });

        matches
            .into_iter()
            .take(limit)
            .map(|(_, station)| station)
            .collect()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the catalog has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn parse_station_id(raw: &str) -> Result<StationId, CatalogError> {
    StationId::parse(raw).map_err(|source| CatalogError::InvalidStationId {
        raw: raw.to_string(),
        source,
    })
}

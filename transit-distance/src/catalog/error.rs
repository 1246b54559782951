//! Catalog load error types.
//!
//! Every variant is fatal: a dataset that fails to load is corrupt, and the
//! process should not start serving queries from it.

use std::path::PathBuf;

use crate::domain::{InvalidCoordinates, InvalidLineId, InvalidStationId, LineId, StationId};

/// Errors raised while loading or validating the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Dataset file could not be read
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset is not valid JSON or has the wrong shape
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("station {raw:?}: {source}")]
    InvalidStationId {
        raw: String,
        source: InvalidStationId,
    },

    #[error("line {raw:?}: {source}")]
    InvalidLineId { raw: String, source: InvalidLineId },

    #[error("station {station}: {source}")]
    InvalidCoordinates {
        station: StationId,
        source: InvalidCoordinates,
    },

    /// A line lists a station the dataset does not define
    #[error("line {line} lists unknown station {station}")]
    UnknownStationInLine { line: LineId, station: StationId },

    /// A line lists the same station more than once
    #[error("line {line} lists station {station} more than once")]
    DuplicateStationInLine { line: LineId, station: StationId },

    /// A station claims a line the dataset does not define
    #[error("station {station} references unknown line {line}")]
    UnknownLine { station: StationId, line: LineId },

    /// A station claims a line that does not list it
    #[error("station {station} claims line {line}, but the line does not list it")]
    MembershipNotListed { station: StationId, line: LineId },

    /// A line lists a station that does not claim it
    #[error("line {line} lists station {station}, but the station does not claim the line")]
    MembershipNotClaimed { line: LineId, station: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn lid(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = CatalogError::UnknownStationInLine {
            line: lid("U2"),
            station: sid("U-XX"),
        };
        assert_eq!(err.to_string(), "line U2 lists unknown station U-XX");

        let err = CatalogError::MembershipNotListed {
            station: sid("U-RP"),
            line: lid("U6"),
        };
        assert_eq!(
            err.to_string(),
            "station U-RP claims line U6, but the line does not list it"
        );

        let err = CatalogError::InvalidStationId {
            raw: "".into(),
            source: StationId::parse("").unwrap_err(),
        };
        assert_eq!(
            err.to_string(),
            "station \"\": invalid station id: must not be empty"
        );

        let err = CatalogError::Io {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset /tmp/missing.json: not found"
        );
    }
}

//! Line identifier and line record types.

use std::borrow::Borrow;
use std::fmt;

use super::StationId;
use super::station::check_identifier;

/// Error returned when parsing an invalid line id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// An opaque line identifier, e.g. `U2` or `S7`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        check_identifier(s).map_err(|reason| InvalidLineId { reason })?;
        Ok(LineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line: an ordered sequence of stations along one physical route.
///
/// # Invariants
///
/// - Each station appears at most once.
/// - Adjacency is strictly immediate predecessor / successor in `stations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub stations: Vec<StationId>,
}

impl Line {
    /// Position of a station in this line, if the line serves it.
    pub fn position(&self, station: &StationId) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Immediate predecessor and successor of the station at `index`.
    ///
    /// Either side is `None` at the ends of the line.
    pub fn neighbors_at(&self, index: usize) -> (Option<&StationId>, Option<&StationId>) {
        let before = index
            .checked_sub(1)
            .and_then(|prev| self.stations.get(prev));
        let after = self.stations.get(index + 1);
        (before, after)
    }
}

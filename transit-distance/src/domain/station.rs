//! Station identifier and station record types.

use std::borrow::Borrow;
use std::fmt;

use super::{Coordinates, LineId};

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Shared validation for opaque dataset identifiers.
///
/// Ids must be non-empty and contain no whitespace or control characters.
pub(super) fn check_identifier(s: &str) -> Result<(), &'static str> {
    if s.is_empty() {
        return Err("must not be empty");
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("must not contain whitespace or control characters");
    }
    Ok(())
}

/// An opaque station identifier, e.g. `U-RP` or `S-Ah`.
///
/// Ordering is lexicographic on the underlying string. Nearest-station
/// resolution relies on this ordering to break ties deterministically.
///
/// # Examples
///
/// ```
/// use transit_distance::domain::StationId;
///
/// let id = StationId::parse("U-RP").unwrap();
/// assert_eq!(id.as_str(), "U-RP");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("U RP").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        check_identifier(s).map_err(|reason| InvalidStationId { reason })?;
        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station as loaded from the dataset. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub coordinates: Coordinates,
    /// Lines serving this station, in dataset order, without duplicates.
    pub lines: Vec<LineId>,
}

impl Station {
    /// Whether the station belongs to at least one line.
    ///
    /// Stations without lines are outside the searchable graph.
    pub fn is_served(&self) -> bool {
        !self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("U-RP").is_ok());
        assert!(StationId::parse("S-Ah").is_ok());
        assert!(StationId::parse("U-n1312931277").is_ok());
        assert!(StationId::parse("SU-Mö").is_ok());
    }

    #[test]
    fn reject_empty() {
        let err = StationId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station id: must not be empty");
    }

    #[test]
    fn reject_whitespace() {
        assert!(StationId::parse(" U-RP").is_err());
        assert!(StationId::parse("U RP").is_err());
        assert!(StationId::parse("U-RP\n").is_err());
        assert!(StationId::parse("U-\tRP").is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("S-Ah").unwrap();
        assert_eq!(format!("{}", id), "S-Ah");
        assert_eq!(format!("{:?}", id), "StationId(S-Ah)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = StationId::parse("S-A").unwrap();
        let b = StationId::parse("S-Ah").unwrap();
        let c = StationId::parse("U-A").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn borrow_allows_str_lookup() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(StationId::parse("U-RP").unwrap(), 1);
        assert_eq!(map.get("U-RP"), Some(&1));
        assert_eq!(map.get("U-Zoo"), None);
    }

    #[test]
    fn is_served() {
        let mut station = Station {
            id: StationId::parse("U-RP").unwrap(),
            name: "Ernst-Reuter-Platz".into(),
            coordinates: Coordinates::new(52.5117, 13.3222).unwrap(),
            lines: vec![],
        };
        assert!(!station.is_served());

        station.lines.push(LineId::parse("U2").unwrap());
        assert!(station.is_served());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9äöüÄÖÜß-]{1,20}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Any string containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[A-Z]{0,5}", b in "[A-Z]{0,5}") {
            let s = format!("{a} {b}");
            prop_assert!(StationId::parse(&s).is_err());
        }

        /// Ordering agrees with string ordering
        #[test]
        fn ordering_matches_str(a in "[A-Za-z-]{1,8}", b in "[A-Za-z-]{1,8}") {
            let ia = StationId::parse(&a).unwrap();
            let ib = StationId::parse(&b).unwrap();
            prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
        }
    }
}

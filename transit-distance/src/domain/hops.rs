//! Hop-count result type.

use std::fmt;

/// Number of station-to-station edges on a shortest path, or `Unreachable`.
///
/// `Unreachable` is an ordinary result, not an error: it means source and
/// target sit in disjoint components of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HopCount {
    Hops(u32),
    Unreachable,
}

impl HopCount {
    /// Wire value used for `Unreachable`.
    pub const UNREACHABLE_SENTINEL: i64 = -1;

    /// Integer form for transport: the hop count, or `-1` when unreachable.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_distance::domain::HopCount;
    ///
    /// assert_eq!(HopCount::Hops(8).as_sentinel(), 8);
    /// assert_eq!(HopCount::Unreachable.as_sentinel(), -1);
    /// ```
    pub fn as_sentinel(self) -> i64 {
        match self {
            HopCount::Hops(n) => i64::from(n),
            HopCount::Unreachable => Self::UNREACHABLE_SENTINEL,
        }
    }
}

impl fmt::Display for HopCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopCount::Hops(1) => f.write_str("1 stop"),
            HopCount::Hops(n) => write!(f, "{n} stops"),
            HopCount::Unreachable => f.write_str("unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_values() {
        assert_eq!(HopCount::Hops(0).as_sentinel(), 0);
        assert_eq!(HopCount::Hops(u32::MAX).as_sentinel(), i64::from(u32::MAX));
        assert_eq!(HopCount::Unreachable.as_sentinel(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(HopCount::Hops(0).to_string(), "0 stops");
        assert_eq!(HopCount::Hops(1).to_string(), "1 stop");
        assert_eq!(HopCount::Hops(8).to_string(), "8 stops");
        assert_eq!(HopCount::Unreachable.to_string(), "unreachable");
    }
}

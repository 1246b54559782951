//! Domain types for the station network.
//!
//! This module contains the value types that represent validated transit
//! data. All types enforce their invariants at construction time, so code
//! that receives these types can trust their validity.

mod coordinates;
mod hops;
mod line;
mod station;

pub use coordinates::{Coordinates, InvalidCoordinates};
pub use hops::HopCount;
pub use line::{InvalidLineId, Line, LineId};
pub use station::{InvalidStationId, Station, StationId};

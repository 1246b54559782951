//! Great-circle distance.

use crate::domain::Coordinates;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres.
///
/// # Examples
///
/// ```
/// use transit_distance::domain::Coordinates;
/// use transit_distance::locate::haversine_km;
///
/// let a = Coordinates::new(0.0, 0.0).unwrap();
/// let b = Coordinates::new(0.0, 1.0).unwrap();
/// assert!((haversine_km(a, b) - 111.195).abs() < 0.001);
/// ```
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn zero_for_same_point() {
        let p = at(52.5117, 13.3222);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_on_equator() {
        let d = haversine_km(at(0.0, 0.0), at(0.0, 1.0));
        assert!((d - 111.1949).abs() < 0.001, "got {d}");

        let d = haversine_km(at(0.0, 0.0), at(1.0, 0.0));
        assert!((d - 111.1949).abs() < 0.001, "got {d}");
    }

    #[test]
    fn ernst_reuter_platz_to_platz_der_luftbruecke() {
        let d = haversine_km(at(52.5117, 13.3222), at(52.4855, 13.3860));
        assert!((d - 5.2096).abs() < 0.001, "got {d}");
    }

    #[test]
    fn ahrensfelde_to_potsdam() {
        let d = haversine_km(at(52.5714, 13.5655), at(52.3917, 13.0664));
        assert!((d - 39.2635).abs() < 0.001, "got {d}");
    }

    #[test]
    fn short_distances() {
        // S and U platforms at Zoologischer Garten, roughly 46 m apart
        let d = haversine_km(at(52.5066, 13.3325), at(52.5070, 13.3323));
        assert!((d - 0.0465).abs() < 0.0005, "got {d}");
    }

    #[test]
    fn antipodes() {
        let d = haversine_km(at(0.0, 0.0), at(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}

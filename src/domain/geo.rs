use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, the standard haversine constant.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two points, in kilometers.
///
/// Inputs are assumed to be valid decimal degrees; out-of-range values
/// produce a mathematically defined but physically meaningless result.
#[inline]
pub fn haversine(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, haversine};

    const CAMPINAS: GeoPoint = GeoPoint { lat: -22.90, lon: -47.06 };
    const BAHIA: GeoPoint = GeoPoint { lat: -12.96, lon: -38.47 };

    #[test]
    fn zero_distance_to_self() {
        assert_eq!(haversine(CAMPINAS, CAMPINAS), 0.0);
        assert_eq!(haversine(BAHIA, BAHIA), 0.0);
    }

    #[test]
    fn symmetric() {
        let there = haversine(CAMPINAS, BAHIA);
        let back = haversine(BAHIA, CAMPINAS);
        assert_eq!(there, back);
    }

    #[test]
    fn campinas_to_bahia_sanity() {
        // Order-of-magnitude check against the known lane, not an exact figure.
        let km = haversine(CAMPINAS, BAHIA);
        assert!(km > 1080.0 && km < 1520.0, "got {km} km");
    }

    #[test]
    fn equator_quarter_turn() {
        let origin = GeoPoint::new(0.0, 0.0);
        let quarter = GeoPoint::new(0.0, 90.0);
        let km = haversine(origin, quarter);
        // A quarter of the mean circumference, within a kilometer.
        let expected = std::f64::consts::PI * super::EARTH_RADIUS_KM / 2.0;
        assert!((km - expected).abs() < 1.0, "got {km} km");
    }
}

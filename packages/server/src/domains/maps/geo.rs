//! Great-circle geometry.

use crate::common::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_pair() {
        // Minneapolis to St. Paul is roughly 16 km
        let minneapolis = Coordinates::new(44.98, -93.27);
        let st_paul = Coordinates::new(44.95, -93.09);

        let distance = haversine_km(minneapolis, st_paul);
        assert!(distance > 15.0 && distance < 17.0, "got {distance}");
    }

    #[test]
    fn test_same_point_is_zero() {
        let point = Coordinates::new(44.98, -93.27);
        assert!(haversine_km(point, point) < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinates::new(51.5237, -0.1586); // Baker Street
        let b = Coordinates::new(51.5034, -0.1276); // Downing Street
        let ab = haversine_km(a, b);
        let ba = haversine_km(b, a);
        assert!((ab - ba).abs() < 1e-9);
        // about 3 km across Westminster
        assert!(ab > 2.0 && ab < 4.0, "got {ab}");
    }
}

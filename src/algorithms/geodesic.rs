//! Great-circle distance on the mean Earth sphere

use crate::core::{Coordinate, EARTH_RADIUS_KM};

/// Haversine great-circle distance between two coordinates, in kilometers.
///
/// Symmetric in its arguments and zero for identical coordinates.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

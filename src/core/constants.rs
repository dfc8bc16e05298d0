//! Physical constants and system parameters

/// Mean Earth radius used by the haversine distance (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default tolerance for the segment projection test (km)
///
/// Absorbs GPS noise and track curvature between consecutive waypoints.
pub const SEGMENT_TOLERANCE_KM: f64 = 5.0;

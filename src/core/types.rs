//! Core value types for the route tracking engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, valid range [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, valid range [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components fall inside the valid geodetic range
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A single position report from the live transport
///
/// The timestamp is carried in the report payload; the engine never reads
/// the local clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    /// Reported vehicle location
    pub location: Coordinate,
    /// Instant the report refers to
    pub timestamp: DateTime<Utc>,
}

impl PositionFix {
    pub fn new(location: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            location,
            timestamp,
        }
    }
}

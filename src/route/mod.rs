//! Route model: an immutable, ordered sequence of waypoints
//!
//! A route is validated once when it is built and never mutated for the
//! lifetime of a tracking session; malformed route data is a
//! construction-time error, not a runtime one.

pub mod source;

use crate::core::Coordinate;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use source::RawWaypointRecord;

/// A named stop on the route with optional schedule metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Display name of the stop
    pub name: String,
    /// Position of the stop within the route, unique across the route
    pub order: u32,
    /// Geographic location of the stop
    pub location: Coordinate,
    /// Planned arrival time of day, if the stop is scheduled
    pub scheduled_arrival: Option<NaiveTime>,
    /// Calendar days past the schedule's reference day, for multi-day runs
    pub day_offset: u32,
}

/// Errors detected while building a route
#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// No waypoints were supplied
    EmptyRoute,
    /// Two waypoints share the same ordering key
    DuplicateOrder { order: u32 },
    /// A waypoint location is outside the valid geodetic range
    InvalidCoordinate {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    /// A waypoint has a blank name
    EmptyName { order: u32 },
    /// A scheduled arrival string could not be parsed
    InvalidArrivalTime { name: String, value: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::EmptyRoute => write!(f, "route has no waypoints"),
            RouteError::DuplicateOrder { order } => {
                write!(f, "duplicate waypoint order {}", order)
            }
            RouteError::InvalidCoordinate {
                name,
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "waypoint {} has out-of-range coordinates ({}, {})",
                    name, latitude, longitude
                )
            }
            RouteError::EmptyName { order } => {
                write!(f, "waypoint with order {} has an empty name", order)
            }
            RouteError::InvalidArrivalTime { name, value } => {
                write!(f, "waypoint {} has unparseable arrival time {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Immutable ordered sequence of waypoints
///
/// Sorted by `order` ascending at construction. Always holds at least one
/// waypoint. Not deserializable: routes are only built through the
/// validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Build a route from waypoints, validating and sorting them.
    pub fn from_waypoints(mut waypoints: Vec<Waypoint>) -> Result<Self, RouteError> {
        if waypoints.is_empty() {
            return Err(RouteError::EmptyRoute);
        }

        for wp in &waypoints {
            if wp.name.trim().is_empty() {
                return Err(RouteError::EmptyName { order: wp.order });
            }
            if !wp.location.is_valid() {
                return Err(RouteError::InvalidCoordinate {
                    name: wp.name.clone(),
                    latitude: wp.location.latitude,
                    longitude: wp.location.longitude,
                });
            }
        }

        waypoints.sort_by_key(|wp| wp.order);

        if let Some(pair) = waypoints.windows(2).find(|pair| pair[0].order == pair[1].order) {
            return Err(RouteError::DuplicateOrder {
                order: pair[0].order,
            });
        }

        Ok(Self { waypoints })
    }

    /// Build a route from raw records as delivered by a route source.
    pub fn from_records(records: Vec<RawWaypointRecord>) -> Result<Self, RouteError> {
        let waypoints = records
            .into_iter()
            .map(RawWaypointRecord::into_waypoint)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_waypoints(waypoints)
    }

    /// Number of waypoints on the route, always at least 1
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoints in route order
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Waypoint at `index`, if it exists
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// The final waypoint of the route
    pub fn terminus(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(name: &str, order: u32, latitude: f64, longitude: f64) -> Waypoint {
        Waypoint {
            name: name.to_string(),
            order,
            location: Coordinate::new(latitude, longitude),
            scheduled_arrival: None,
            day_offset: 0,
        }
    }

    #[test]
    fn test_empty_route_is_rejected() {
        assert_eq!(Route::from_waypoints(vec![]), Err(RouteError::EmptyRoute));
    }

    #[test]
    fn test_duplicate_order_is_rejected() {
        let result = Route::from_waypoints(vec![
            waypoint("Alpha", 1, 0.0, 0.0),
            waypoint("Bravo", 1, 0.0, 0.5),
        ]);
        assert_eq!(result, Err(RouteError::DuplicateOrder { order: 1 }));
    }

    #[test]
    fn test_out_of_range_coordinate_is_rejected() {
        let result = Route::from_waypoints(vec![waypoint("Alpha", 1, 95.0, 0.0)]);
        assert!(matches!(
            result,
            Err(RouteError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Route::from_waypoints(vec![waypoint("  ", 1, 0.0, 0.0)]);
        assert_eq!(result, Err(RouteError::EmptyName { order: 1 }));
    }

    #[test]
    fn test_waypoints_are_sorted_by_order() {
        let route = Route::from_waypoints(vec![
            waypoint("Charlie", 30, 0.0, 1.0),
            waypoint("Alpha", 10, 0.0, 0.0),
            waypoint("Bravo", 20, 0.0, 0.5),
        ])
        .unwrap();

        let names: Vec<&str> = route.waypoints().iter().map(|wp| wp.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
        assert_eq!(route.terminus().name, "Charlie");
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn test_single_waypoint_route_is_valid() {
        let route = Route::from_waypoints(vec![waypoint("Only", 1, 10.0, 20.0)]).unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.terminus().name, "Only");
    }
}

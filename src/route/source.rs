//! Raw waypoint records as delivered by a route source
//!
//! A route source returns one record per stop: a name, coordinates, an
//! ordering key and optional schedule fields. Records are converted and
//! validated into [`Waypoint`]s when the route is built; the engine never
//! sees an unvalidated record.

use crate::core::Coordinate;
use crate::route::{RouteError, Waypoint};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One waypoint record from a route source, prior to validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWaypointRecord {
    /// Display name of the stop
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Position of the stop within the route
    pub order: u32,
    /// Planned arrival as an `HH:MM:SS` time-of-day string
    #[serde(default)]
    pub scheduled_arrival: Option<String>,
    /// Calendar days past the schedule's reference day
    #[serde(default)]
    pub day_offset: u32,
}

impl RawWaypointRecord {
    /// Parse the schedule fields and convert into a route waypoint.
    ///
    /// Coordinate range checks happen during route construction, so a bad
    /// latitude here surfaces as a [`RouteError`] from the same build call.
    pub fn into_waypoint(self) -> Result<Waypoint, RouteError> {
        let scheduled_arrival = match &self.scheduled_arrival {
            Some(raw) => Some(NaiveTime::parse_from_str(raw, "%H:%M:%S").map_err(|_| {
                RouteError::InvalidArrivalTime {
                    name: self.name.clone(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Waypoint {
            name: self.name,
            order: self.order,
            location: Coordinate::new(self.latitude, self.longitude),
            scheduled_arrival,
            day_offset: self.day_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    #[test]
    fn test_record_with_schedule_converts() {
        let record = RawWaypointRecord {
            name: "Alpha".to_string(),
            latitude: 24.8607,
            longitude: 67.0011,
            order: 1,
            scheduled_arrival: Some("10:30:00".to_string()),
            day_offset: 1,
        };

        let wp = record.into_waypoint().unwrap();
        assert_eq!(wp.name, "Alpha");
        assert_eq!(
            wp.scheduled_arrival,
            Some(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
        );
        assert_eq!(wp.day_offset, 1);
    }

    #[test]
    fn test_unparseable_arrival_time_is_rejected() {
        let record = RawWaypointRecord {
            name: "Alpha".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            order: 1,
            scheduled_arrival: Some("half past ten".to_string()),
            day_offset: 0,
        };

        assert!(matches!(
            record.into_waypoint(),
            Err(RouteError::InvalidArrivalTime { .. })
        ));
    }

    #[test]
    fn test_records_deserialize_from_source_json() {
        let raw = r#"[
            {"name": "Bravo", "latitude": 0.0, "longitude": 0.5, "order": 2,
             "scheduled_arrival": "11:00:00"},
            {"name": "Alpha", "latitude": 0.0, "longitude": 0.0, "order": 1}
        ]"#;

        let records: Vec<RawWaypointRecord> = serde_json::from_str(raw).unwrap();
        let route = Route::from_records(records).unwrap();

        assert_eq!(route.waypoints()[0].name, "Alpha");
        assert_eq!(route.waypoints()[0].scheduled_arrival, None);
        assert_eq!(route.waypoints()[1].name, "Bravo");
    }
}

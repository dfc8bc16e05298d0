//! Status output types

use crate::core::{Coordinate, PositionFix};
use crate::processing::delay::ScheduleDelay;
use crate::processing::progress::ProgressTracker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable status record assembled after each accepted fix
///
/// Absent sub-results are `None`, never an error: a snapshot is produced
/// for every fix the engine accepts, however degraded the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Name of the last waypoint passed, `None` before departure
    pub last_waypoint: Option<String>,
    /// Name of the next waypoint ahead, `None` once past the terminus
    pub next_waypoint: Option<String>,
    /// Instantaneous speed (km/h), `None` until two ordered fixes arrive
    pub speed_kmh: Option<f64>,
    /// Time behind the next waypoint's schedule, `None` without a schedule
    pub delay: Option<ScheduleDelay>,
    /// Location reported by the fix
    pub fix_location: Coordinate,
    /// Instant carried by the fix
    pub fix_timestamp: DateTime<Utc>,
}

impl StatusSnapshot {
    /// Assemble a snapshot from the tracker state and the per-fix
    /// estimates.
    pub fn assemble(
        tracker: &ProgressTracker,
        speed_kmh: Option<f64>,
        delay: Option<ScheduleDelay>,
        fix: &PositionFix,
    ) -> Self {
        Self {
            last_waypoint: tracker.last_waypoint().map(|wp| wp.name.clone()),
            next_waypoint: tracker.next_waypoint().map(|wp| wp.name.clone()),
            speed_kmh,
            delay,
            fix_location: fix.location,
            fix_timestamp: fix.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{Route, Waypoint};
    use chrono::TimeZone;

    #[test]
    fn test_snapshot_reflects_tracker_state() {
        let route = Route::from_waypoints(vec![
            Waypoint {
                name: "Alpha".to_string(),
                order: 1,
                location: Coordinate::new(0.0, 0.0),
                scheduled_arrival: None,
                day_offset: 0,
            },
            Waypoint {
                name: "Bravo".to_string(),
                order: 2,
                location: Coordinate::new(0.0, 0.5),
                scheduled_arrival: None,
                day_offset: 0,
            },
        ])
        .unwrap();

        let mut tracker = ProgressTracker::new(route);
        let fix = PositionFix::new(
            Coordinate::new(0.0, 0.25),
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
        );
        tracker.advance(&fix);

        let snapshot = StatusSnapshot::assemble(&tracker, Some(54.0), None, &fix);
        assert_eq!(snapshot.last_waypoint.as_deref(), Some("Alpha"));
        assert_eq!(snapshot.next_waypoint.as_deref(), Some("Bravo"));
        assert_eq!(snapshot.speed_kmh, Some(54.0));
        assert_eq!(snapshot.delay, None);
        assert_eq!(snapshot.fix_timestamp, fix.timestamp);
    }
}

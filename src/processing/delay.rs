//! Schedule deviation against the next waypoint

use crate::route::Waypoint;
use chrono::{DateTime, Days, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time behind schedule, as whole hours and remainder minutes
///
/// Running early or on time reads as zero; the value is non-negative by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDelay {
    pub hours: u32,
    pub minutes: u32,
}

impl ScheduleDelay {
    /// Build from a signed duration, clamping early running to zero.
    pub fn from_duration(behind: Duration) -> Self {
        let total_minutes = behind.num_minutes().max(0);
        Self {
            hours: (total_minutes / 60) as u32,
            minutes: (total_minutes % 60) as u32,
        }
    }

    pub fn zero() -> Self {
        Self {
            hours: 0,
            minutes: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for ScheduleDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hr {} min", self.hours, self.minutes)
    }
}

/// Estimate how far behind schedule the vehicle runs against a waypoint's
/// planned arrival.
///
/// The scheduled instant is the waypoint's arrival time of day on
/// `reference_date` shifted by the waypoint's day offset. The reference
/// date is the schedule's day zero for the whole session, so a vehicle
/// that crosses midnight is still measured against the day the schedule
/// meant. Returns `None` when the waypoint carries no schedule or the
/// shifted date leaves the calendar.
pub fn estimate_delay(
    waypoint: &Waypoint,
    now: DateTime<Utc>,
    reference_date: NaiveDate,
) -> Option<ScheduleDelay> {
    let arrival = waypoint.scheduled_arrival?;
    let day = reference_date.checked_add_days(Days::new(u64::from(waypoint.day_offset)))?;
    let scheduled = day.and_time(arrival).and_utc();
    Some(ScheduleDelay::from_duration(
        now.signed_duration_since(scheduled),
    ))
}

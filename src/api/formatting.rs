//! Snapshot rendering for presentation layers
//!
//! The engine hands presentation a plain [`StatusSnapshot`]; the
//! formatters here turn one into a display string. Missing sub-results
//! render as fixed sentinels rather than being omitted, so a status
//! display always shows every line.

use crate::api::types::StatusSnapshot;
use crate::processing::progress::{AT_TERMINUS, BEFORE_ROUTE};

/// Shown for speed until two ordered fixes have arrived
const SPEED_PENDING: &str = "calculating";

/// Shown for delay when the next waypoint carries no schedule
const DELAY_UNKNOWN: &str = "unknown";

/// Renders snapshots into an output format
pub trait SnapshotFormatter {
    fn format(&self, snapshot: &StatusSnapshot) -> String;
}

/// Human-readable multi-line status text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl SnapshotFormatter for TextFormatter {
    fn format(&self, snapshot: &StatusSnapshot) -> String {
        let last = snapshot.last_waypoint.as_deref().unwrap_or(BEFORE_ROUTE);
        let next = snapshot.next_waypoint.as_deref().unwrap_or(AT_TERMINUS);
        let speed = match snapshot.speed_kmh {
            Some(speed) => format!("{:.0} km/h", speed),
            None => SPEED_PENDING.to_string(),
        };
        let delay = match snapshot.delay {
            Some(delay) => delay.to_string(),
            None => DELAY_UNKNOWN.to_string(),
        };

        format!(
            "Last waypoint: {}\nNext waypoint: {}\nSpeed: {}\nDelay: {}\nPosition: {:.6}, {:.6}\nUpdated: {}",
            last,
            next,
            speed,
            delay,
            snapshot.fix_location.latitude,
            snapshot.fix_location.longitude,
            snapshot.fix_timestamp.format("%H:%M:%S"),
        )
    }
}

/// JSON rendering of the snapshot record
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Pretty-print the output
    pub pretty: bool,
}

impl SnapshotFormatter for JsonFormatter {
    fn format(&self, snapshot: &StatusSnapshot) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(snapshot)
        } else {
            serde_json::to_string(snapshot)
        };
        rendered.unwrap_or_default()
    }
}

//! Progress correlation: mapping position fixes onto the route
//!
//! The tracker maintains a forward-only cursor over the route. Each fix is
//! scanned against the segments ahead of the cursor with the segment
//! projection test; the cursor advances when the fix correlates with a
//! segment and stays put otherwise. A momentarily noisy fix can stall the
//! cursor for one report but can never move it backwards.

use crate::algorithms::projection::{classify_segment, SegmentRelation};
use crate::core::{PositionFix, SEGMENT_TOLERANCE_KM};
use crate::route::{Route, Waypoint};
use log::debug;
use std::collections::HashSet;

/// Name reported for the last waypoint before any waypoint has been passed
pub const BEFORE_ROUTE: &str = "origin / not yet departed";

/// Name reported for the next waypoint once the terminus has been passed
pub const AT_TERMINUS: &str = "destination reached";

/// Monotonic progress over the route
///
/// `cursor` is the index of the last waypoint confirmed passed, `None`
/// before the first crossing. It never decreases for the lifetime of a
/// session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    /// Index of the last waypoint passed
    pub cursor: Option<usize>,
    /// Every index confirmed passed so far
    pub crossed: HashSet<usize>,
}

/// Correlates position fixes against the route and advances a
/// forward-only cursor
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    route: Route,
    state: ProgressState,
    tolerance_km: f64,
}

impl ProgressTracker {
    /// Create a tracker with the default segment tolerance.
    pub fn new(route: Route) -> Self {
        Self::with_tolerance(route, SEGMENT_TOLERANCE_KM)
    }

    /// Create a tracker with a custom segment tolerance (km).
    pub fn with_tolerance(route: Route, tolerance_km: f64) -> Self {
        Self {
            route,
            state: ProgressState::default(),
            tolerance_km,
        }
    }

    /// Advance the cursor for a new position fix.
    ///
    /// Candidate indices are scanned forward from the cursor. A fix lying
    /// on segment `i -> i+1` marks waypoint `i` passed; a fix beyond the
    /// segment marks both endpoints passed. The scan stops at the first
    /// segment that matches neither way. No segment exists past the final
    /// waypoint, so the cursor saturates at the terminus.
    pub fn advance(&mut self, fix: &PositionFix) {
        let len = self.route.len();
        let mut i = self.state.cursor.unwrap_or(0);

        while i + 1 < len {
            let a = self.route.waypoints()[i].location;
            let b = self.route.waypoints()[i + 1].location;
            match classify_segment(fix.location, a, b, self.tolerance_km) {
                SegmentRelation::OnSegment => {
                    self.mark_crossed(i);
                    i += 1;
                }
                SegmentRelation::Overshot => {
                    self.mark_crossed(i);
                    self.mark_crossed(i + 1);
                    i += 2;
                }
                SegmentRelation::Off => break,
            }
        }
    }

    fn mark_crossed(&mut self, index: usize) {
        self.state.crossed.insert(index);
        if self.state.cursor.map_or(true, |cursor| index > cursor) {
            debug!(
                "cursor advanced to waypoint {} ({})",
                index,
                self.route.waypoints()[index].name
            );
            self.state.cursor = Some(index);
        }
    }

    /// The last waypoint confirmed passed, `None` before departure
    pub fn last_waypoint(&self) -> Option<&Waypoint> {
        self.state.cursor.map(|cursor| &self.route.waypoints()[cursor])
    }

    /// The next waypoint ahead of the cursor, `None` once at the terminus
    pub fn next_waypoint(&self) -> Option<&Waypoint> {
        match self.state.cursor {
            None => self.route.waypoints().first(),
            Some(cursor) => self.route.waypoint(cursor + 1),
        }
    }

    /// Name of the last waypoint passed, with the pre-departure sentinel
    pub fn last_waypoint_name(&self) -> &str {
        self.last_waypoint().map_or(BEFORE_ROUTE, |wp| wp.name.as_str())
    }

    /// Name of the next waypoint ahead, with the terminus sentinel
    pub fn next_waypoint_name(&self) -> &str {
        self.next_waypoint().map_or(AT_TERMINUS, |wp| wp.name.as_str())
    }

    /// Whether the final waypoint has been passed
    pub fn at_terminus(&self) -> bool {
        self.state.cursor == Some(self.route.len() - 1)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }
}

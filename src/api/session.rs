//! Tracking session facade
//!
//! A session owns the route, the progress tracker and the speed
//! estimator, and runs the per-fix pipeline: progress correlation, speed
//! estimation, delay estimation, snapshot assembly. One session tracks
//! one vehicle over one route; fixes must be fed one at a time, in
//! arrival order.

use crate::api::types::StatusSnapshot;
use crate::core::PositionFix;
use crate::processing::delay::estimate_delay;
use crate::processing::progress::ProgressTracker;
use crate::processing::speed::SpeedEstimator;
use crate::route::Route;
use crate::utils::config::TrackerConfig;
use chrono::NaiveDate;
use log::debug;

/// Stateful facade over the progress, speed and delay components
pub struct TrackingSession {
    tracker: ProgressTracker,
    speed: SpeedEstimator,
    /// Day zero of the schedule; taken from the first fix unless pinned
    /// through configuration
    reference_date: Option<NaiveDate>,
}

impl TrackingSession {
    /// Create a session with default configuration.
    pub fn new(route: Route) -> Self {
        Self::with_config(route, TrackerConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(route: Route, config: TrackerConfig) -> Self {
        Self {
            tracker: ProgressTracker::with_tolerance(route, config.segment_tolerance_km),
            speed: SpeedEstimator::new(),
            reference_date: config.reference_date,
        }
    }

    /// Process one fix and return the resulting status snapshot.
    ///
    /// The exclusive borrow serializes updates: no two fixes can be in
    /// flight against the same session state.
    pub fn advance(&mut self, fix: &PositionFix) -> StatusSnapshot {
        let reference_date = *self
            .reference_date
            .get_or_insert_with(|| fix.timestamp.date_naive());

        self.tracker.advance(fix);
        let speed_kmh = self.speed.update(fix);
        let delay = self
            .tracker
            .next_waypoint()
            .and_then(|wp| estimate_delay(wp, fix.timestamp, reference_date));

        let snapshot = StatusSnapshot::assemble(&self.tracker, speed_kmh, delay, fix);
        debug!(
            "fix at ({}, {}) -> last {:?}, next {:?}",
            fix.location.latitude,
            fix.location.longitude,
            snapshot.last_waypoint,
            snapshot.next_waypoint
        );
        snapshot
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn route(&self) -> &Route {
        self.tracker.route()
    }

    /// The schedule's day zero, once established
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }
}

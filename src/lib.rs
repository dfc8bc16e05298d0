//! Route progress tracking engine
//!
//! Correlates a stream of noisy, irregularly spaced position reports with
//! a fixed, ordered route of waypoints and derives, for each report: the
//! last waypoint passed, the next waypoint ahead, the instantaneous speed
//! and the delay against the next waypoint's scheduled arrival.
//!
//! The cursor over the route is forward-only: a noisy fix can stall
//! progress for one report but can never move the vehicle backwards.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod processing;
pub mod route;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Coordinate, PositionFix, EARTH_RADIUS_KM, SEGMENT_TOLERANCE_KM};
pub use algorithms::geodesic::haversine_km;
pub use algorithms::projection::{classify_segment, SegmentRelation};
pub use api::callback::{CallbackHandle, CallbackTracker, SnapshotCallback};
pub use api::formatting::{JsonFormatter, SnapshotFormatter, TextFormatter};
pub use api::session::TrackingSession;
pub use api::types::StatusSnapshot;
pub use processing::delay::{estimate_delay, ScheduleDelay};
pub use processing::progress::{ProgressState, ProgressTracker, AT_TERMINUS, BEFORE_ROUTE};
pub use processing::speed::SpeedEstimator;
pub use route::source::RawWaypointRecord;
pub use route::{Route, RouteError, Waypoint};
pub use utils::config::{ConfigError, TrackerConfig};
pub use validation::fix::{FixError, FixTimestamp, RawFixPayload};

//! Instantaneous speed from the two most recent fixes

use crate::algorithms::geodesic::haversine_km;
use crate::core::PositionFix;
use log::debug;

/// Derives instantaneous speed from consecutive position fixes
///
/// Keeps exactly one previous sample; each accepted fix overwrites it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedEstimator {
    previous: Option<PositionFix>,
}

impl SpeedEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next fix and return the speed in km/h, if computable.
    ///
    /// The first fix only seeds the estimator. A fix whose timestamp does
    /// not advance past the retained sample is rejected and the sample
    /// kept, so a duplicated or reordered report cannot produce an
    /// infinite or negative speed.
    pub fn update(&mut self, fix: &PositionFix) -> Option<f64> {
        let previous = match self.previous {
            Some(previous) => previous,
            None => {
                self.previous = Some(*fix);
                return None;
            }
        };

        let elapsed = fix.timestamp.signed_duration_since(previous.timestamp);
        let hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;
        if hours <= 0.0 {
            debug!("speed sample rejected: timestamp did not advance");
            return None;
        }

        let distance_km = haversine_km(previous.location, fix.location);
        self.previous = Some(*fix);
        Some(distance_km / hours)
    }

    /// The retained previous sample, if any
    pub fn last_sample(&self) -> Option<&PositionFix> {
        self.previous.as_ref()
    }
}

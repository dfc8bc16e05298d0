//! Segment projection test for route correlation
//!
//! Anchors a position match to the route topology instead of raw
//! waypoint distance: a fix is related to a directed segment between two
//! consecutive waypoints, which disambiguates cases where the vehicle is
//! geographically closer to a waypoint behind a loop or bend than to the
//! one actually ahead.

use crate::algorithms::geodesic::haversine_km;
use crate::core::Coordinate;

/// Relation of a position to a directed route segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRelation {
    /// The position lies on the segment within tolerance; the segment
    /// start has been passed
    OnSegment,
    /// The position lies beyond the segment end; both endpoints have been
    /// passed
    Overshot,
    /// The position does not correlate with this segment
    Off,
}

/// Classify `fix` against the directed segment from `a` to `b`.
///
/// The position is on the segment when the triangle inequality nearly
/// collapses: the detour through the position adds less than
/// `tolerance_km` to the direct leg. It has overshot the segment when it
/// is farther from the start than the whole leg and closer to the end
/// than to the start. The on-segment test takes precedence, so a position
/// just past the end still reads as on the segment.
pub fn classify_segment(
    fix: Coordinate,
    a: Coordinate,
    b: Coordinate,
    tolerance_km: f64,
) -> SegmentRelation {
    let d_fix_a = haversine_km(fix, a);
    let d_fix_b = haversine_km(fix, b);
    let d_a_b = haversine_km(a, b);

    if (d_fix_a + d_fix_b - d_a_b).abs() < tolerance_km {
        SegmentRelation::OnSegment
    } else if d_fix_a > d_a_b && d_fix_b < d_fix_a {
        SegmentRelation::Overshot
    } else {
        SegmentRelation::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SEGMENT_TOLERANCE_KM;

    #[test]
    fn test_midpoint_is_on_segment() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.5);
        let mid = Coordinate::new(0.0, 0.25);
        assert_eq!(
            classify_segment(mid, a, b, SEGMENT_TOLERANCE_KM),
            SegmentRelation::OnSegment
        );
    }

    #[test]
    fn test_far_off_track_fix_is_off() {
        // Waypoints ~4.4 km apart, fix ~20 km north of the segment
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.04);
        let fix = Coordinate::new(0.18, 0.0);
        assert_eq!(
            classify_segment(fix, a, b, SEGMENT_TOLERANCE_KM),
            SegmentRelation::Off
        );
    }

    #[test]
    fn test_position_beyond_end_is_overshot() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.5);
        let past = Coordinate::new(0.0, 0.6);
        assert_eq!(
            classify_segment(past, a, b, SEGMENT_TOLERANCE_KM),
            SegmentRelation::Overshot
        );
    }

    #[test]
    fn test_just_past_end_still_reads_on_segment() {
        // ~1.1 km past the end: the collapsed triangle wins over overshoot
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.5);
        let just_past = Coordinate::new(0.0, 0.51);
        assert_eq!(
            classify_segment(just_past, a, b, SEGMENT_TOLERANCE_KM),
            SegmentRelation::OnSegment
        );
    }

    #[test]
    fn test_position_behind_start_is_off() {
        let a = Coordinate::new(0.0, 0.5);
        let b = Coordinate::new(0.0, 1.0);
        let behind = Coordinate::new(0.0, 0.3);
        assert_eq!(
            classify_segment(behind, a, b, SEGMENT_TOLERANCE_KM),
            SegmentRelation::Off
        );
    }
}

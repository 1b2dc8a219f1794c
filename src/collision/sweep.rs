//! Swept test of a moving point against the segments of a segment collider.

use super::segment_collider::SegmentCollider;
use crate::config::{CrossingPolicy, WorldConfig};
use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;
use log::{debug, trace};

/// Where and when a body's motion over one tick crosses a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Index of the crossed segment in its collider.
    pub segment_index: usize,
    /// Fraction of the tick's motion at which the crossing happens, in [0, 1].
    pub time: f64,
    /// Crossing point on the segment.
    pub point: Vec2,
    /// Unit normal of the crossed segment.
    pub normal: Vec2,
}

/// Tests the motion `previous -> current` against a single segment.
pub fn sweep_segment(
    segment: &LineSegment,
    segment_index: usize,
    previous: Vec2,
    current: Vec2,
    config: &WorldConfig,
) -> Option<Crossing> {
    let motion = current - previous;

    let Some(normal) = segment.normal(config.degenerate_epsilon) else {
        trace!("segment {}: degenerate, skipped", segment_index);
        return None;
    };

    // Compared against the motion length so slow bodies are not mistaken for parallel ones
    let approach = normal.dot(motion);
    if approach.abs() <= config.parallel_epsilon * motion.magnitude() {
        trace!("segment {}: motion parallel to segment", segment_index);
        return None;
    }

    // Signed distances of the line and both motion endpoints along the normal
    let line = normal.dot(segment.start);
    let from = normal.dot(previous);
    let to = normal.dot(current);

    // Both endpoints on one side means the line is never crossed.
    // Ending exactly on the line still counts; starting on it and leaving does not.
    if (from <= line && to < line) || (from >= line && to > line) {
        trace!("segment {}: motion stays on one side", segment_index);
        return None;
    }

    let time = (line - from) / approach;
    let point = previous + motion * time;

    if !segment.contains_projection(point) {
        trace!(
            "segment {}: crossing {:?} outside segment bounds",
            segment_index,
            point
        );
        return None;
    }

    Some(Crossing {
        segment_index,
        time,
        point,
        normal,
    })
}

/// Tests the motion `previous -> current` against every segment of `store`,
/// in index order, and returns the crossing selected by `config.crossing_policy`.
///
/// With [`CrossingPolicy::LastIndex`] every segment is still tested after a hit
/// and the highest-index crossing survives, even if a lower-index segment was
/// crossed earlier in the tick.
pub fn sweep_segments(
    store: &SegmentCollider,
    previous: Vec2,
    current: Vec2,
    config: &WorldConfig,
) -> Option<Crossing> {
    let mut selected: Option<Crossing> = None;

    for (index, segment) in store.segments().iter().enumerate() {
        let Some(crossing) = sweep_segment(segment, index, previous, current, config) else {
            continue;
        };

        selected = match (config.crossing_policy, selected) {
            (CrossingPolicy::Earliest, Some(best)) if best.time <= crossing.time => Some(best),
            _ => Some(crossing),
        };
    }

    if let Some(crossing) = &selected {
        debug!(
            "crossing registered on segment {} at t={:.4}, point {:?}",
            crossing.segment_index, crossing.time, crossing.point
        );
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn store_with(segments: &[(Vec2, Vec2)]) -> SegmentCollider {
        let mut store = SegmentCollider::new().unwrap();
        for &(start, end) in segments {
            store.append_segment(start, end).unwrap();
        }
        store
    }

    #[test]
    fn test_simple_perpendicular_hit() {
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))]);
        let crossing = sweep_segments(
            &store,
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
            &WorldConfig::default(),
        )
        .expect("motion crosses the segment");

        assert_eq!(crossing.segment_index, 0);
        assert!((crossing.time - 0.5).abs() < EPSILON);
        assert!(crossing.point.x.abs() < EPSILON);
        assert!(crossing.point.y.abs() < EPSILON);
        assert!((crossing.normal.y.abs() - 1.0).abs() < EPSILON);
        assert!(crossing.normal.x.abs() < EPSILON);
    }

    #[test]
    fn test_crossing_from_either_side() {
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))]);
        let config = WorldConfig::default();
        let crossing = sweep_segments(&store, Vec2::new(0.5, 2.0), Vec2::new(0.5, -2.0), &config)
            .expect("downward motion crosses");
        assert!((crossing.time - 0.5).abs() < EPSILON);
        assert!((crossing.point.x - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_bounded_intersection_miss() {
        // Crosses the infinite line at (5, 0), beyond the segment end
        let store = store_with(&[(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))]);
        let result = sweep_segments(
            &store,
            Vec2::new(5.0, -1.0),
            Vec2::new(5.0, 1.0),
            &WorldConfig::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_before_segment_start_miss() {
        let store = store_with(&[(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))]);
        let result = sweep_segments(
            &store,
            Vec2::new(-0.5, -1.0),
            Vec2::new(-0.5, 1.0),
            &WorldConfig::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_parallel_miss() {
        let store = store_with(&[(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0))]);
        let config = WorldConfig::default();

        // Sliding along the segment itself, and just above it
        let along = sweep_segments(&store, Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), &config);
        assert!(along.is_none());
        let above = sweep_segments(&store, Vec2::new(-1.0, 1e-6), Vec2::new(1.0, 1e-6), &config);
        assert!(above.is_none());
    }

    #[test]
    fn test_near_parallel_within_epsilon_is_parallel() {
        let store = store_with(&[(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0))]);
        let config = WorldConfig {
            parallel_epsilon: 1e-6,
            ..WorldConfig::default()
        };
        // |dot(n, v)| / |v| is about 1e-7, below the band
        let result = sweep_segments(
            &store,
            Vec2::new(0.0, -0.5e-7),
            Vec2::new(1.0, 0.5e-7),
            &config,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_tiny_perpendicular_motion_still_crosses() {
        // The whole step is shorter than the parallel band, but head-on
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))]);
        let crossing = sweep_segments(
            &store,
            Vec2::new(0.0, -4e-10),
            Vec2::new(0.0, 4e-10),
            &WorldConfig::default(),
        )
        .expect("slow head-on motion crosses");

        assert!((crossing.time - 0.5).abs() < EPSILON);
        assert!(crossing.point.x.abs() < EPSILON);
        assert!(crossing.point.y.abs() < EPSILON);
    }

    #[test]
    fn test_zero_motion_never_crosses() {
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))]);
        let resting = Vec2::new(0.0, 0.0);
        assert!(sweep_segments(&store, resting, resting, &WorldConfig::default()).is_none());
    }

    #[test]
    fn test_very_long_segment_has_finite_normal() {
        // Squared length overflows f64
        let store = store_with(&[(Vec2::new(-1e160, 0.0), Vec2::new(1e160, 0.0))]);
        let crossing = sweep_segments(
            &store,
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
            &WorldConfig::default(),
        )
        .expect("motion crosses the long segment");

        assert!((crossing.time - 0.5).abs() < EPSILON);
        assert!(crossing.point.x.abs() < EPSILON);
        assert!(crossing.point.y.abs() < EPSILON);
        assert!((crossing.normal.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_same_side_no_crossing() {
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))]);
        let config = WorldConfig::default();
        let above = sweep_segments(&store, Vec2::new(0.0, 2.0), Vec2::new(0.0, 1.0), &config);
        assert!(above.is_none());
        let below = sweep_segments(&store, Vec2::new(0.0, -2.0), Vec2::new(0.0, -1.0), &config);
        assert!(below.is_none());
    }

    #[test]
    fn test_ending_on_line_counts_starting_on_line_does_not() {
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0))]);
        let config = WorldConfig::default();

        let ending = sweep_segments(&store, Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), &config)
            .expect("landing exactly on the segment registers");
        assert!((ending.time - 1.0).abs() < EPSILON);

        let leaving = sweep_segments(&store, Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), &config);
        assert!(leaving.is_none());
    }

    #[test]
    fn test_crossing_at_endpoint_is_inside() {
        let store = store_with(&[(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0))]);
        let crossing = sweep_segments(
            &store,
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            &WorldConfig::default(),
        );
        assert!(crossing.is_some());
    }

    #[test]
    fn test_degenerate_segment_skipped() {
        let p = Vec2::new(0.0, 0.0);
        let store = store_with(&[(p, p)]);
        let result = sweep_segments(
            &store,
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
            &WorldConfig::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_degenerate_segment_does_not_hide_others() {
        let p = Vec2::new(0.0, 0.0);
        let store = store_with(&[(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)), (p, p)]);
        let crossing = sweep_segments(
            &store,
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
            &WorldConfig::default(),
        )
        .unwrap();
        assert_eq!(crossing.segment_index, 0);
        assert!(crossing.point.x.is_finite() && crossing.point.y.is_finite());
    }

    #[test]
    fn test_empty_store() {
        let store = SegmentCollider::new().unwrap();
        let config = WorldConfig::default();
        assert!(sweep_segments(&store, Vec2::ZERO, Vec2::new(1.0, 1.0), &config).is_none());
    }

    // Two horizontal walls, the later-indexed one crossed first in time.
    fn two_walls() -> SegmentCollider {
        store_with(&[
            (Vec2::new(-5.0, 2.0), Vec2::new(5.0, 2.0)), // crossed at t = 0.75
            (Vec2::new(-5.0, 1.0), Vec2::new(5.0, 1.0)), // crossed at t = 0.5
        ])
    }

    #[test]
    fn test_multi_crossing_last_index_wins() {
        let crossing = sweep_segments(
            &two_walls(),
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 3.0),
            &WorldConfig::default(),
        )
        .unwrap();

        // Index order decides, not time of impact
        assert_eq!(crossing.segment_index, 1);
        assert!((crossing.time - 0.5).abs() < EPSILON);

        let reversed = sweep_segments(
            &two_walls(),
            Vec2::new(0.0, 3.0),
            Vec2::new(0.0, -1.0),
            &WorldConfig::default(),
        )
        .unwrap();
        assert_eq!(reversed.segment_index, 1);
        assert!((reversed.time - 0.5).abs() < EPSILON);
        assert!((reversed.point.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_multi_crossing_earliest_policy() {
        let config = WorldConfig {
            crossing_policy: CrossingPolicy::Earliest,
            ..WorldConfig::default()
        };

        let walls = two_walls();
        let upward = sweep_segments(&walls, Vec2::new(0.0, -1.0), Vec2::new(0.0, 3.0), &config);
        assert_eq!(upward.unwrap().segment_index, 1);

        let downward =
            sweep_segments(&walls, Vec2::new(0.0, 3.0), Vec2::new(0.0, -1.0), &config).unwrap();
        assert_eq!(downward.segment_index, 0);
        assert!((downward.time - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_earliest_policy_ties_keep_lower_index() {
        // Two segments meeting at the crossing point
        let store = store_with(&[
            (Vec2::new(-1.0, 0.0), Vec2::new(0.0, 0.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
        ]);
        let config = WorldConfig {
            crossing_policy: CrossingPolicy::Earliest,
            ..WorldConfig::default()
        };
        let (previous, current) = (Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));

        let earliest = sweep_segments(&store, previous, current, &config).unwrap();
        assert_eq!(earliest.segment_index, 0);

        let last = sweep_segments(&store, previous, current, &WorldConfig::default()).unwrap();
        assert_eq!(last.segment_index, 1);
    }

    #[test]
    fn test_diagonal_segment() {
        let segment = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let crossing = sweep_segment(
            &segment,
            3,
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 0.0),
            &WorldConfig::default(),
        )
        .unwrap();
        assert_eq!(crossing.segment_index, 3);
        assert!((crossing.time - 0.5).abs() < EPSILON);
        assert!((crossing.point.x - 1.0).abs() < EPSILON);
        assert!((crossing.point.y - 1.0).abs() < EPSILON);
        assert!((crossing.normal.magnitude() - 1.0).abs() < EPSILON);
    }
}

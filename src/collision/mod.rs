pub mod collider;
pub mod response;
pub mod segment_collider;
pub mod sweep;

pub use collider::{Collider, ColliderKind, ColliderType};
pub use response::{compute_resolution, resolve, Resolution};
pub use segment_collider::SegmentCollider;
pub use sweep::{sweep_segment, sweep_segments, Crossing};

use crate::config::WorldConfig;
use crate::error::CollisionError;
use crate::objects::scene::BodyFacets;

/// Tests the tick's motion of the body owning `circle` against the segments of
/// `line` and, on a crossing, bounces the body off the selected segment.
///
/// Returns `Ok(true)` when a segment registered a crossing. Any collider pair
/// other than (line, circle) is rejected as not applicable.
pub fn test_and_resolve(
    line: &Collider,
    circle: &Collider,
    body: BodyFacets<'_>,
    config: &WorldConfig,
) -> Result<bool, CollisionError> {
    let Some(segments) = line.segments() else {
        return Err(CollisionError::NotApplicable {
            expected: ColliderType::Line.name(),
            found: line.collider_type().name(),
        });
    };
    if circle.collider_type() != ColliderType::Circle {
        return Err(CollisionError::NotApplicable {
            expected: ColliderType::Circle.name(),
            found: circle.collider_type().name(),
        });
    }

    let previous = body.physics.old_translation();
    let current = body.transform.translation();

    match sweep_segments(segments, previous, current, config) {
        Some(crossing) => {
            resolve(&crossing, body.transform, body.physics);
            Ok(true)
        }
        None => Ok(false),
    }
}

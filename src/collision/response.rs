//! Specular reflection response for a body that crossed a segment.

use super::sweep::Crossing;
use crate::math::transform::TransformAccess;
use crate::math::vec2::Vec2;
use crate::objects::physics::PhysicsAccess;
use log::debug;

/// Below this squared length the reflected overshoot has no usable direction.
const MIN_REFLECTION_LENGTH_SQ: f64 = 1e-18;

/// Post-collision state for the moving body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub translation: Vec2,
    pub rotation: f64,
    pub velocity: Vec2,
}

/// Computes where the body ends up after bouncing off the crossed segment.
///
/// The part of the motion past the crossing point is mirrored about the
/// segment normal. The body faces along the mirrored motion and keeps the
/// speed of `velocity`.
///
/// If the body stopped exactly on the segment there is no overshoot to mirror;
/// the incoming velocity is reflected instead and the body is left on the
/// crossing point.
pub fn compute_resolution(
    crossing: &Crossing,
    current: Vec2,
    rotation: f64,
    velocity: Vec2,
) -> Resolution {
    let speed = velocity.magnitude();
    let overshoot = current - crossing.point;
    let reflected = overshoot.reflect(crossing.normal);

    if reflected.magnitude_squared() > MIN_REFLECTION_LENGTH_SQ {
        return Resolution {
            translation: crossing.point + reflected,
            rotation: reflected.to_angle(),
            velocity: reflected.normalize() * speed,
        };
    }

    let bounced = velocity.reflect(crossing.normal);
    let rotation = if bounced.magnitude_squared() > MIN_REFLECTION_LENGTH_SQ {
        bounced.to_angle()
    } else {
        rotation
    };
    Resolution {
        translation: crossing.point,
        rotation,
        velocity: bounced,
    }
}

/// Applies the reflection response for `crossing` to the body's transform and physics.
pub fn resolve<T, P>(crossing: &Crossing, transform: &mut T, physics: &mut P) -> Resolution
where
    T: TransformAccess + ?Sized,
    P: PhysicsAccess + ?Sized,
{
    let resolution = compute_resolution(
        crossing,
        transform.translation(),
        transform.rotation(),
        physics.velocity(),
    );

    transform.set_translation(resolution.translation);
    transform.set_rotation(resolution.rotation);
    physics.set_velocity(resolution.velocity);

    debug!(
        "resolved crossing on segment {}: translation {:?}, velocity {:?}",
        crossing.segment_index, resolution.translation, resolution.velocity
    );
    resolution
}

use crate::math::transform::TransformAccess;
use crate::math::vec2::Vec2;

/// Read/write access to the motion state the collision resolver needs.
pub trait PhysicsAccess {
    /// Translation at the start of the current tick.
    fn old_translation(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
}

/// Motion state of a moving object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Physics {
    pub old_translation: Vec2,
    pub acceleration: Vec2,
    pub velocity: Vec2,
    pub rotational_velocity: f64, // Radians per second
}

impl Physics {
    pub fn new(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Self::default()
        }
    }

    /// Advances `transform` by one tick using Semi-Implicit Euler.
    ///
    /// The translation held before the move is remembered as the old
    /// translation, giving the swept collision test its motion segment.
    pub fn update<T: TransformAccess + ?Sized>(&mut self, transform: &mut T, dt: f64) {
        self.old_translation = transform.translation();

        // v = v + a*dt, then p = p + v*dt
        self.velocity += self.acceleration * dt;
        transform.set_translation(self.old_translation + self.velocity * dt);

        if self.rotational_velocity != 0.0 {
            let rotation = transform.rotation() + self.rotational_velocity * dt;
            transform.set_rotation(wrap_angle(rotation));
        }
    }
}

impl PhysicsAccess for Physics {
    fn old_translation(&self) -> Vec2 {
        self.old_translation
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}

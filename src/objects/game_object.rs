use super::physics::Physics;
use crate::collision::Collider;
use crate::math::transform::Transform;

/// Index of a game object within its [`Scene`](super::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// A named object with optional components.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameObject {
    pub name: String,
    pub transform: Option<Transform>,
    pub physics: Option<Physics>,
    pub collider: Option<Collider>,
}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_physics(mut self, physics: Physics) -> Self {
        self.physics = Some(physics);
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Advances the object by one tick if it has both a transform and physics.
    pub fn update(&mut self, dt: f64) {
        if let (Some(transform), Some(physics)) = (self.transform.as_mut(), self.physics.as_mut()) {
            physics.update(transform, dt);
        }
    }
}

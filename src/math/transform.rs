use super::vec2::Vec2;

/// Read/write access to an object's placement in the world.
///
/// The collision resolver only talks to bodies through this trait, so any
/// transform representation can be driven by it.
pub trait TransformAccess {
    fn translation(&self) -> Vec2;
    fn set_translation(&mut self, translation: Vec2);
    fn rotation(&self) -> f64;
    fn set_rotation(&mut self, rotation: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: f64, // Angle in radians
}

impl Transform {
    /// Creates a new transform.
    pub fn new(translation: Vec2, rotation: f64) -> Self {
        Self { translation, rotation }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformAccess for Transform {
    fn translation(&self) -> Vec2 {
        self.translation
    }

    fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }
}

use super::game_object::{GameObject, ObjectId};
use super::physics::{Physics, PhysicsAccess};
use crate::collision::Collider;
use crate::error::CollisionError;
use crate::math::transform::{Transform, TransformAccess};

/// Mutable views of the two facets the collision resolver writes to.
pub struct BodyFacets<'a> {
    pub transform: &'a mut dyn TransformAccess,
    pub physics: &'a mut dyn PhysicsAccess,
}

impl<'a> BodyFacets<'a> {
    pub fn new(transform: &'a mut Transform, physics: &'a mut Physics) -> Self {
        Self { transform, physics }
    }

    /// Splits an object into its collider and the facets the resolver writes to.
    pub fn with_collider(
        object: &'a mut GameObject,
    ) -> Result<(&'a Collider, Self), CollisionError> {
        let GameObject {
            transform,
            physics,
            collider,
            ..
        } = object;

        let collider = collider
            .as_ref()
            .ok_or(CollisionError::MissingFacet("collider"))?;
        let transform = transform
            .as_mut()
            .ok_or(CollisionError::MissingFacet("transform"))?;
        let physics = physics
            .as_mut()
            .ok_or(CollisionError::MissingFacet("physics"))?;
        Ok((collider, Self::new(transform, physics)))
    }
}

/// Flat object graph owning every live game object.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<GameObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns its id. An attached collider is pointed back at the new id.
    pub fn add(&mut self, mut object: GameObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        if let Some(collider) = object.collider.as_mut() {
            collider.set_owner(id);
        }
        self.objects.push(object);
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &GameObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GameObject> {
        self.objects.iter_mut()
    }

    /// Mutable references to two distinct objects.
    /// Returns `None` if the ids are equal or out of range.
    pub fn pair_mut(
        &mut self,
        a: ObjectId,
        b: ObjectId,
    ) -> Option<(&mut GameObject, &mut GameObject)> {
        if a == b || a.0 >= self.objects.len() || b.0 >= self.objects.len() {
            return None;
        }

        if a.0 < b.0 {
            let (head, tail) = self.objects.split_at_mut(b.0);
            Some((&mut head[a.0], &mut tail[0]))
        } else {
            let (head, tail) = self.objects.split_at_mut(a.0);
            Some((&mut tail[0], &mut head[b.0]))
        }
    }
}

use crate::collision::{self, ColliderType, SegmentCollider};
use crate::config::WorldConfig;
use crate::error::{ColliderError, CollisionError};
use crate::objects::game_object::ObjectId;
use crate::objects::scene::{BodyFacets, Scene};
use log::{debug, trace};

/// Drives one simulation tick: moves every object, then bounces moving
/// circles off the scene's segment colliders.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    config: WorldConfig,
}

impl CollisionWorld {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Creates an empty segment collider sized by this world's configuration.
    pub fn create_segment_collider(&self) -> Result<SegmentCollider, ColliderError> {
        SegmentCollider::with_capacity(self.config.segment_capacity)
    }

    /// Integrates every object by `dt`, then resolves segment crossings.
    /// Returns the number of bodies that bounced this tick.
    pub fn step(&self, scene: &mut Scene, dt: f64) -> Result<usize, CollisionError> {
        for object in scene.iter_mut() {
            object.update(dt);
        }
        self.resolve_collisions(scene)
    }

    /// Tests every moving circle against every segment collider, in scene order.
    /// Returns the number of bodies for which any segment registered a crossing.
    pub fn resolve_collisions(&self, scene: &mut Scene) -> Result<usize, CollisionError> {
        let mut lines = Vec::new();
        let mut circles = Vec::new();
        for (id, object) in scene.iter() {
            match object.collider.as_ref().map(|c| c.collider_type()) {
                Some(ColliderType::Line) => lines.push(id),
                Some(ColliderType::Circle)
                    if object.transform.is_some() && object.physics.is_some() =>
                {
                    circles.push(id)
                }
                _ => {}
            }
        }

        let mut bounced = 0;
        for &circle_id in &circles {
            let mut hit = false;
            for &line_id in &lines {
                hit |= self.test_pair(scene, line_id, circle_id)?;
            }
            if hit {
                bounced += 1;
            }
        }

        trace!(
            "{} bodies against {} segment colliders, {} bounced",
            circles.len(),
            lines.len(),
            bounced
        );
        Ok(bounced)
    }

    fn test_pair(
        &self,
        scene: &mut Scene,
        line_id: ObjectId,
        circle_id: ObjectId,
    ) -> Result<bool, CollisionError> {
        let (line_object, circle_object) = scene
            .pair_mut(line_id, circle_id)
            .ok_or(CollisionError::MissingFacet("object"))?;

        let line = line_object
            .collider
            .as_ref()
            .ok_or(CollisionError::MissingFacet("collider"))?;
        let (circle, body) = BodyFacets::with_collider(circle_object)?;

        let hit = collision::test_and_resolve(line, circle, body, &self.config)?;
        if hit {
            debug!("'{}' bounced off '{}'", circle_object.name, line_object.name);
        }
        Ok(hit)
    }
}

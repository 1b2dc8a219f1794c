//! Swept collision of moving circles against static line-segment colliders.
//!
//! Each tick a [`CollisionWorld`] integrates the objects of a [`Scene`], then
//! tests every moving circle's motion against every segment collider and
//! bounces it off the crossed segment with a speed-preserving reflection.

pub mod collision;
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{
    test_and_resolve, Collider, ColliderKind, ColliderType, Crossing, SegmentCollider,
};
pub use config::{CrossingPolicy, WorldConfig};
pub use error::{ColliderError, CollisionError, StreamError};
pub use io::{RecordStream, TextStream};
pub use math::{Transform, TransformAccess, Vec2};
pub use objects::{BodyFacets, GameObject, ObjectId, Physics, PhysicsAccess, Scene};
pub use shapes::LineSegment;
pub use world::CollisionWorld;

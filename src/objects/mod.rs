pub mod game_object;
pub mod physics;
pub mod scene;

pub use game_object::{GameObject, ObjectId};
pub use physics::{Physics, PhysicsAccess};
pub use scene::{BodyFacets, Scene};

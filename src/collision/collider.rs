use super::segment_collider::SegmentCollider;
use crate::objects::game_object::ObjectId;
use std::fmt;

/// Type tag of a collider, used to select the right collision routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderType {
    Circle,
    Line,
}

impl ColliderType {
    pub fn name(self) -> &'static str {
        match self {
            ColliderType::Circle => "circle",
            ColliderType::Line => "line",
        }
    }
}

impl fmt::Display for ColliderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape-specific collider data.
#[derive(Debug, Clone, PartialEq)]
pub enum ColliderKind {
    Circle { radius: f64 },
    Line(SegmentCollider),
}

/// A collider component attached to a game object.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub kind: ColliderKind,
    /// Object this collider is attached to. Never owns the object.
    owner: Option<ObjectId>,
}

impl Collider {
    pub fn circle(radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self {
            kind: ColliderKind::Circle { radius },
            owner: None,
        }
    }

    pub fn line(segments: SegmentCollider) -> Self {
        Self {
            kind: ColliderKind::Line(segments),
            owner: None,
        }
    }

    pub fn collider_type(&self) -> ColliderType {
        match self.kind {
            ColliderKind::Circle { .. } => ColliderType::Circle,
            ColliderKind::Line(_) => ColliderType::Line,
        }
    }

    pub fn owner(&self) -> Option<ObjectId> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: ObjectId) {
        self.owner = Some(owner);
    }

    pub fn segments(&self) -> Option<&SegmentCollider> {
        match &self.kind {
            ColliderKind::Line(segments) => Some(segments),
            ColliderKind::Circle { .. } => None,
        }
    }

    pub fn segments_mut(&mut self) -> Option<&mut SegmentCollider> {
        match &mut self.kind {
            ColliderKind::Line(segments) => Some(segments),
            ColliderKind::Circle { .. } => None,
        }
    }

    /// Bytes used by this collider, including reserved segment storage.
    pub fn memory_size(&self) -> usize {
        let inline = std::mem::size_of::<Self>();
        match &self.kind {
            ColliderKind::Circle { .. } => inline,
            ColliderKind::Line(segments) => {
                inline + segments.capacity() * std::mem::size_of::<crate::shapes::LineSegment>()
            }
        }
    }
}

use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector of the line segment (from start to end).
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Unit normal `(e.y, -e.x)` of the segment direction `e`.
    ///
    /// Returns `None` when the squared length is at or below `degenerate_epsilon`,
    /// where the normal has no defined direction.
    pub fn normal(&self, degenerate_epsilon: f64) -> Option<Vec2> {
        let e = self.direction();
        if e.magnitude_squared() <= degenerate_epsilon {
            return None;
        }
        Some(e.perpendicular_cw().normalize())
    }

    /// True if `point`, assumed to lie on the segment's infinite line,
    /// falls between the two endpoints (inclusive).
    pub fn contains_projection(&self, point: Vec2) -> bool {
        let from_start = (self.end - self.start).dot(point - self.start);
        let from_end = (self.start - self.end).dot(point - self.end);
        from_start >= 0.0 && from_end >= 0.0
    }
}

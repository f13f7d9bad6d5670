//! Axis-aligned rectangles in screen space

use serde::{Serialize, Deserialize};

use crate::Vec2;

/// Axis-aligned rectangle defined by its minimum and maximum corners
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner (top-left in screen space)
    pub min: Vec2,
    /// Maximum corner (bottom-right in screen space)
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle anchored at the origin with the given size
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside or on the edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Shrink the rectangle by `margin` on every side
    ///
    /// If an axis is narrower than `2 * margin` it collapses to its midpoint,
    /// so the result is never inverted.
    pub fn inset(&self, margin: f32) -> Self {
        let center = self.center();
        let (min_x, max_x) = if self.width() >= 2.0 * margin {
            (self.min.x + margin, self.max.x - margin)
        } else {
            (center.x, center.x)
        };
        let (min_y, max_y) = if self.height() >= 2.0 * margin {
            (self.min.y + margin, self.max.y - margin)
        } else {
            (center.y, center.y)
        };
        Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Clamp a point so it lies inside the rectangle
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp_components(self.min, self.max)
    }
}

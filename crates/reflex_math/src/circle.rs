//! Circles and point-circle containment

use serde::{Serialize, Deserialize};

use crate::Vec2;

/// A circle defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle at the given center with the given radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Check whether two circle centers are at least `min_distance` apart
    pub fn is_separated_from(&self, other: &Circle, min_distance: f32) -> bool {
        self.center.distance(other.center) >= min_distance
    }
}

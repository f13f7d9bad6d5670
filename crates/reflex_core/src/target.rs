//! Circular click targets

use reflex_math::{Circle, Vec2};
use serde::{Deserialize, Serialize};

/// A circular target the player has to click
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Target {
    /// Create a target centered at `(x, y)`
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Create a target centered at `position`
    pub fn at(position: Vec2, radius: f32) -> Self {
        Self::new(position.x, position.y, radius)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.position(), self.radius)
    }
}

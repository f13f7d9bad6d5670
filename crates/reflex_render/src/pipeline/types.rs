//! GPU-compatible data types for the shape pipeline
//!
//! These types match the layouts in `shape.wgsl` exactly.

use bytemuck::{Pod, Zeroable};

/// Which signed distance function the fragment shader evaluates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ShapeKind {
    Rect = 0,
    Circle = 1,
}

/// One shape, in window pixels
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub center: [f32; 2],
    /// Half width and half height; circles use `x` as the radius
    pub half_extents: [f32; 2],
    /// RGBA, 0..1
    pub color: [f32; 4],
    pub kind: u32,
    pub _padding: [u32; 3],
}

impl ShapeInstance {
    /// Axis-aligned rectangle from its top-left corner and size
    pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x + width * 0.5, y + height * 0.5],
            half_extents: [width * 0.5, height * 0.5],
            color,
            kind: ShapeKind::Rect as u32,
            _padding: [0; 3],
        }
    }

    pub fn circle(center: [f32; 2], radius: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            half_extents: [radius, radius],
            color,
            kind: ShapeKind::Circle as u32,
            _padding: [0; 3],
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        if self.kind == ShapeKind::Circle as u32 {
            ShapeKind::Circle
        } else {
            ShapeKind::Rect
        }
    }
}

/// Per-frame uniforms
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Surface size in pixels
    pub size: [f32; 2],
    /// Padding for 16-byte alignment
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_shape_instance_size() {
        // 2 + 2 + 4 floats + 1 u32 kind + 3 u32 padding = 12 words = 48 bytes
        assert_eq!(size_of::<ShapeInstance>(), 48);
    }

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_rect_from_corner() {
        let r = ShapeInstance::rect(10.0, 20.0, 100.0, 2.0, [1.0; 4]);
        assert_eq!(r.center, [60.0, 21.0]);
        assert_eq!(r.half_extents, [50.0, 1.0]);
        assert_eq!(r.shape_kind(), ShapeKind::Rect);
    }

    #[test]
    fn test_circle() {
        let c = ShapeInstance::circle([5.0, 6.0], 7.0, [1.0; 4]);
        assert_eq!(c.half_extents, [7.0, 7.0]);
        assert_eq!(c.shape_kind(), ShapeKind::Circle);
    }
}

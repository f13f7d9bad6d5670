//! Snapshot to shape list conversion
//!
//! Draw order, back to front: grid, guide line, targets, crosshair, game-over
//! overlay. While the round is over, targets and crosshair are hidden.

use reflex_core::{FrameSnapshot, Rect};

use crate::pipeline::ShapeInstance;

/// Convert an 8-bit RGB triple to an opaque 0..1 color
pub fn rgb8(rgb: [u8; 3]) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        1.0,
    ]
}

/// Colors and sizes for drawing a session
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub background: [f32; 4],
    pub grid: [f32; 4],
    /// Grid spacing in pixels; 0 disables the grid
    pub grid_size: f32,
    pub guide_line: [f32; 4],
    pub guide_line_thickness: f32,
    pub target: [f32; 4],
    pub crosshair: [f32; 4],
    /// Arm length from the crosshair center
    pub crosshair_size: f32,
    pub crosshair_thickness: f32,
    /// Game-over overlay color, alpha included
    pub overlay: [f32; 4],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: rgb8([70, 70, 70]),
            grid: rgb8([40, 40, 40]),
            grid_size: 50.0,
            guide_line: rgb8([60, 60, 60]),
            guide_line_thickness: 2.0,
            target: rgb8([255, 50, 50]),
            crosshair: rgb8([255, 255, 255]),
            crosshair_size: 6.0,
            crosshair_thickness: 2.0,
            overlay: [0.0, 0.0, 0.0, 0.5],
        }
    }
}

/// Shapes for one frame plus the clear color
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeBatch {
    pub clear_color: [f32; 4],
    pub instances: Vec<ShapeInstance>,
}

impl ShapeBatch {
    pub fn from_snapshot(snapshot: &FrameSnapshot, style: &RenderStyle) -> Self {
        let mut batch = Self {
            clear_color: style.background,
            instances: Vec::new(),
        };

        let bounds = snapshot.bounds;
        let (width, height) = (bounds.width(), bounds.height());
        batch.push_grid(bounds, style);

        if let Some(line_y) = snapshot.guide_line_y {
            let thickness = style.guide_line_thickness;
            batch.push(ShapeInstance::rect(
                bounds.min.x,
                line_y - thickness * 0.5,
                width,
                thickness,
                style.guide_line,
            ));
        }

        if snapshot.is_game_over() {
            batch.push(ShapeInstance::rect(
                bounds.min.x,
                bounds.min.y,
                width,
                height,
                style.overlay,
            ));
            return batch;
        }

        for target in &snapshot.targets {
            batch.push(ShapeInstance::circle([target.x, target.y], target.radius, style.target));
        }

        let c = snapshot.crosshair;
        let arm = style.crosshair_size;
        let t = style.crosshair_thickness;
        batch.push(ShapeInstance::rect(c.x - arm, c.y - t * 0.5, arm * 2.0, t, style.crosshair));
        batch.push(ShapeInstance::rect(c.x - t * 0.5, c.y - arm, t, arm * 2.0, style.crosshair));

        batch
    }

    /// Background and grid only, used while no session is running
    pub fn backdrop(bounds: Rect, style: &RenderStyle) -> Self {
        let mut batch = Self {
            clear_color: style.background,
            instances: Vec::new(),
        };
        batch.push_grid(bounds, style);
        batch
    }

    fn push_grid(&mut self, bounds: Rect, style: &RenderStyle) {
        if style.grid_size <= 0.0 {
            return;
        }
        let (width, height) = (bounds.width(), bounds.height());
        let mut x = bounds.min.x;
        while x < bounds.max.x {
            self.push(ShapeInstance::rect(x, bounds.min.y, 1.0, height, style.grid));
            x += style.grid_size;
        }
        let mut y = bounds.min.y;
        while y < bounds.max.y {
            self.push(ShapeInstance::rect(bounds.min.x, y, width, 1.0, style.grid));
            y += style.grid_size;
        }
    }

    fn push(&mut self, instance: ShapeInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear_color;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

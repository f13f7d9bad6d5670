//! 2D Mathematics Library
//!
//! Screen-space primitives for the Reflex aim trainer.
//!
//! - [`Vec2`] - 2D vector / point (x right, y down)
//! - [`Rect`] - Axis-aligned rectangle used for window and placement bounds
//! - [`Circle`] - Circle with point containment, used for target hit tests

mod vec2;
mod rect;
mod circle;

pub use vec2::Vec2;
pub use rect::Rect;
pub use circle::Circle;

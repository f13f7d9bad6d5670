//! 2D Rendering Library
//!
//! This crate draws [`reflex_core::FrameSnapshot`]s with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Instanced circles and rectangles
//! - [`scene::ShapeBatch`] - Turns a snapshot into shape instances (no GPU needed)
//! - [`scene::RenderStyle`] - Colors and sizes used by the batch builder

pub mod context;
pub mod error;
pub mod pipeline;
pub mod scene;

pub use error::RenderError;
pub use scene::{RenderStyle, ShapeBatch};

//! Rendering pipeline components
//!
//! A single instanced pipeline draws every shape on screen.

pub mod types;
pub mod shape_pipeline;

pub use types::{ScreenUniforms, ShapeInstance, ShapeKind};
pub use shape_pipeline::ShapePipeline;

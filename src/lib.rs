//! Reflex application library
//!
//! Configuration, input mapping, the menu, and the per-frame session loop.
//! The binary in `main.rs` wires these to a winit window.

pub mod config;
pub mod input;
pub mod menu;
pub mod settings;
pub mod systems;

//! Input handling module
//!
//! Turns raw winit events into queued [`reflex_input::InputEvent`]s and maps
//! keys to menu and session actions.

mod input_mapper;

pub use input_mapper::{InputMapper, MenuAction, SessionAction};

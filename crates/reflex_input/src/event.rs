//! Input events queued between frames

use reflex_math::Vec2;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// A discrete input event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(KeyCode),
    MouseButtonDown(MouseButton),
    /// Scroll amount in lines, positive away from the user
    MouseWheel(f32),
}

/// Everything that happened since the previous frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Events in arrival order
    pub events: Vec<InputEvent>,
    /// Sum of raw pointer motion
    pub pointer_delta: Vec2,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Add raw pointer motion to the frame's total
    pub fn add_motion(&mut self, delta: Vec2) {
        self.pointer_delta += delta;
    }

    /// Hand the accumulated input over and start a new frame
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.pointer_delta == Vec2::ZERO
    }

    /// Builder: append an event
    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.push(event);
        self
    }

    /// Builder: set raw pointer motion
    pub fn with_motion(mut self, delta: Vec2) -> Self {
        self.add_motion(delta);
        self
    }
}

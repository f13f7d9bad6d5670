//! Input handling for the Reflex aim trainer
//!
//! - [`InputEvent`] / [`FrameInput`] - Events queued between two frames
//! - [`PointerDevice`] - Seam over the OS pointer (grab, hide, warp)
//! - [`WindowPointer`] - winit implementation of [`PointerDevice`]
//! - [`RecordingPointer`] - Test double that records every call
//! - [`SensitivityController`] - Scales raw mouse motion into a clamped crosshair

mod event;
mod pointer;
mod sensitivity;

pub use event::{FrameInput, InputEvent};
pub use pointer::{PointerCall, PointerDevice, PointerError, RecordingPointer, WindowPointer};
pub use sensitivity::{
    SensitivityController, DEFAULT_SENSITIVITY, MAX_SENSITIVITY, MIN_SENSITIVITY, WHEEL_STEP,
};

// Re-export winit input types so callers can match on them
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

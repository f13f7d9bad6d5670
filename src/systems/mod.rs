//! Application systems
//!
//! The session loop and frame pacing have no window dependency and are tested
//! directly. Window and render systems wrap winit and wgpu.

mod frame_limiter;
mod render;
mod session;
mod window;

pub use frame_limiter::FrameLimiter;
pub use render::RenderSystem;
pub use session::{AimSession, FrameOutcome, SessionExit};
pub use window::{WindowError, WindowSystem};

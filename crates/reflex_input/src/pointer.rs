//! OS pointer access
//!
//! [`PointerDevice`] is the only way the sensitivity controller touches the
//! real cursor. [`WindowPointer`] forwards to winit; [`RecordingPointer`]
//! records calls so capture behavior can be tested without a window.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use reflex_math::Vec2;
use thiserror::Error;
use winit::dpi::PhysicalPosition;
use winit::window::{CursorGrabMode, Window};

#[derive(Debug, Error)]
pub enum PointerError {
    #[error("Failed to grab pointer: {0}")]
    Grab(String),

    #[error("Failed to move pointer: {0}")]
    Warp(String),
}

/// Exclusive pointer capture primitives
pub trait PointerDevice {
    /// Keep the pointer inside the window
    fn grab(&mut self) -> Result<(), PointerError>;

    /// Give the pointer back to the OS
    fn release(&mut self);

    fn set_cursor_visible(&mut self, visible: bool);

    /// Move the pointer to `position` in window pixels
    fn warp_to(&mut self, position: Vec2) -> Result<(), PointerError>;
}

/// Pointer of a winit window
#[derive(Clone)]
pub struct WindowPointer {
    window: Arc<Window>,
}

impl WindowPointer {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl PointerDevice for WindowPointer {
    fn grab(&mut self) -> Result<(), PointerError> {
        self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
            .map_err(|e| PointerError::Grab(e.to_string()))
    }

    fn release(&mut self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor grab: {}", e);
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }

    fn warp_to(&mut self, position: Vec2) -> Result<(), PointerError> {
        self.window
            .set_cursor_position(PhysicalPosition::new(position.x as f64, position.y as f64))
            .map_err(|e| PointerError::Warp(e.to_string()))
    }
}

/// A call made on a [`RecordingPointer`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerCall {
    Grab,
    Release,
    SetCursorVisible(bool),
    WarpTo(Vec2),
}

#[derive(Debug)]
struct PointerLog {
    calls: Vec<PointerCall>,
    grabbed: bool,
    cursor_visible: bool,
    refuse_grab: bool,
}

/// In-memory pointer that records every call
///
/// Clones share the same log, so a test can keep one handle while the
/// controller owns another.
#[derive(Clone, Debug)]
pub struct RecordingPointer {
    log: Rc<RefCell<PointerLog>>,
}

impl Default for RecordingPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingPointer {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(PointerLog {
                calls: Vec::new(),
                grabbed: false,
                cursor_visible: true,
                refuse_grab: false,
            })),
        }
    }

    /// A pointer whose grab always fails, like a platform without grab support
    pub fn refusing_grab() -> Self {
        let pointer = Self::new();
        pointer.log.borrow_mut().refuse_grab = true;
        pointer
    }

    pub fn calls(&self) -> Vec<PointerCall> {
        self.log.borrow().calls.clone()
    }

    pub fn is_grabbed(&self) -> bool {
        self.log.borrow().grabbed
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.log.borrow().cursor_visible
    }

    /// Positions passed to `warp_to`, in order
    pub fn warps(&self) -> Vec<Vec2> {
        self.log
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                PointerCall::WarpTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().calls.clear();
    }
}

impl PointerDevice for RecordingPointer {
    fn grab(&mut self) -> Result<(), PointerError> {
        let mut log = self.log.borrow_mut();
        log.calls.push(PointerCall::Grab);
        if log.refuse_grab {
            return Err(PointerError::Grab("grab not supported".to_string()));
        }
        log.grabbed = true;
        Ok(())
    }

    fn release(&mut self) {
        let mut log = self.log.borrow_mut();
        log.calls.push(PointerCall::Release);
        log.grabbed = false;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        let mut log = self.log.borrow_mut();
        log.calls.push(PointerCall::SetCursorVisible(visible));
        log.cursor_visible = visible;
    }

    fn warp_to(&mut self, position: Vec2) -> Result<(), PointerError> {
        self.log.borrow_mut().calls.push(PointerCall::WarpTo(position));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_pointer_shares_log_between_clones() {
        let observer = RecordingPointer::new();
        let mut device = observer.clone();

        device.grab().unwrap();
        device.set_cursor_visible(false);
        device.warp_to(Vec2::new(10.0, 20.0)).unwrap();

        assert!(observer.is_grabbed());
        assert!(!observer.is_cursor_visible());
        assert_eq!(observer.warps(), vec![Vec2::new(10.0, 20.0)]);
        assert_eq!(observer.calls().len(), 3);
    }

    #[test]
    fn test_refusing_grab() {
        let mut device = RecordingPointer::refusing_grab();
        let err = device.grab().unwrap_err();
        assert!(err.to_string().contains("grab"));
        assert!(!device.is_grabbed());
    }
}

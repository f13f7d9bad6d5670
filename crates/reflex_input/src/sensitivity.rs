//! Crosshair driven by scaled raw mouse motion
//!
//! While active the controller owns the OS pointer: it is grabbed, hidden and
//! warped back to the window center after every update, so raw motion is
//! never cut off by the screen edge. The crosshair itself lives in window
//! space and is clamped to the window.

use reflex_math::{Rect, Vec2};

use crate::pointer::PointerDevice;

/// Lowest accepted sensitivity
pub const MIN_SENSITIVITY: f32 = 0.1;
/// Highest accepted sensitivity
pub const MAX_SENSITIVITY: f32 = 2.0;
pub const DEFAULT_SENSITIVITY: f32 = 1.0;
/// Sensitivity change per wheel notch
pub const WHEEL_STEP: f32 = 0.1;

/// Scales raw pointer deltas into a crosshair position
pub struct SensitivityController<P: PointerDevice> {
    device: P,
    scale: f32,
    crosshair: Vec2,
    bounds: Rect,
    center: Vec2,
    active: bool,
}

impl<P: PointerDevice> SensitivityController<P> {
    /// Create an inactive controller with the crosshair at the window center
    pub fn new(device: P, width: f32, height: f32, scale: f32) -> Self {
        let bounds = Rect::from_size(width, height);
        let center = bounds.center();
        Self {
            device,
            scale,
            crosshair: center,
            bounds,
            center,
            active: false,
        }
    }

    pub fn set_sensitivity(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn sensitivity(&self) -> f32 {
        self.scale
    }

    /// Change sensitivity by `delta` wheel notches and return the new value
    pub fn adjust_by(&mut self, delta: f32) -> f32 {
        self.scale = (self.scale + delta * WHEEL_STEP).clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
        log::debug!("Sensitivity set to {:.2}", self.scale);
        self.scale
    }

    /// Apply one frame of raw pointer motion and return the new crosshair
    pub fn update(&mut self, raw_delta: Vec2) -> Vec2 {
        self.crosshair = self.bounds.clamp(self.crosshair + raw_delta * self.scale);

        if self.active {
            if let Err(e) = self.device.warp_to(self.center) {
                log::debug!("{}", e);
            }
        }

        self.crosshair
    }

    /// Take exclusive control of the pointer
    ///
    /// Does nothing if already active. A failed grab is logged and play goes
    /// on with the pointer hidden and re-centered every frame.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }

        match self.device.grab() {
            Ok(()) => log::info!("Pointer captured"),
            Err(e) => log::warn!("{}", e),
        }
        self.device.set_cursor_visible(false);
        self.center = self.bounds.center();
        if let Err(e) = self.device.warp_to(self.center) {
            log::debug!("{}", e);
        }
        self.active = true;
    }

    /// Give the pointer back. Does nothing if not active.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.device.release();
        self.device.set_cursor_visible(true);
        self.active = false;
        log::info!("Pointer released");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn crosshair(&self) -> Vec2 {
        self.crosshair
    }

    /// Put the crosshair back in the middle of the window
    pub fn recenter(&mut self) {
        self.crosshair = self.bounds.center();
    }

    /// Window size changed
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Rect::from_size(width, height);
        self.center = self.bounds.center();
        self.crosshair = self.bounds.clamp(self.crosshair);
    }
}

impl<P: PointerDevice> Drop for SensitivityController<P> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::{PointerCall, RecordingPointer};

    type Controller = SensitivityController<RecordingPointer>;

    fn controller(scale: f32) -> (Controller, RecordingPointer) {
        let pointer = RecordingPointer::new();
        let controller = SensitivityController::new(pointer.clone(), 800.0, 600.0, scale);
        (controller, pointer)
    }

    #[test]
    fn test_starts_centered_and_inactive() {
        let (c, pointer) = controller(1.0);
        assert_eq!(c.crosshair(), Vec2::new(400.0, 300.0));
        assert!(!c.is_active());
        assert!(pointer.calls().is_empty());
    }

    #[test]
    fn test_update_scales_delta() {
        let (mut c, _) = controller(0.5);
        assert_eq!(c.update(Vec2::new(100.0, -40.0)), Vec2::new(450.0, 280.0));
    }

    #[test]
    fn test_update_clamps_to_window() {
        let (mut c, _) = controller(2.0);
        assert_eq!(c.update(Vec2::new(1000.0, 1000.0)), Vec2::new(800.0, 600.0));
        assert_eq!(c.update(Vec2::new(-5000.0, -5000.0)), Vec2::ZERO);
    }

    #[test]
    fn test_adjust_by_steps_and_clamps() {
        let (mut c, _) = controller(1.0);
        c.adjust_by(1.0);
        let value = c.adjust_by(1.0);
        assert!((value - 1.2).abs() < 1e-5);

        for _ in 0..20 {
            c.adjust_by(1.0);
        }
        assert_eq!(c.sensitivity(), 2.0);

        for _ in 0..40 {
            c.adjust_by(-1.0);
        }
        assert_eq!(c.sensitivity(), 0.1);
    }

    #[test]
    fn test_activate_grabs_hides_and_centers() {
        let (mut c, pointer) = controller(1.0);
        c.activate();

        assert!(c.is_active());
        assert!(pointer.is_grabbed());
        assert!(!pointer.is_cursor_visible());
        assert_eq!(
            pointer.calls(),
            vec![
                PointerCall::Grab,
                PointerCall::SetCursorVisible(false),
                PointerCall::WarpTo(Vec2::new(400.0, 300.0)),
            ]
        );
    }

    #[test]
    fn test_activate_and_deactivate_are_idempotent() {
        let (mut c, pointer) = controller(1.0);
        c.activate();
        c.activate();
        assert_eq!(pointer.calls().len(), 3);

        pointer.clear();
        c.deactivate();
        c.deactivate();
        assert_eq!(
            pointer.calls(),
            vec![PointerCall::Release, PointerCall::SetCursorVisible(true)]
        );
        assert!(!pointer.is_grabbed());
    }

    #[test]
    fn test_update_warps_only_while_active() {
        let (mut c, pointer) = controller(1.0);
        c.update(Vec2::new(5.0, 5.0));
        assert!(pointer.warps().is_empty());

        c.activate();
        pointer.clear();
        c.update(Vec2::new(5.0, 5.0));
        c.update(Vec2::new(-3.0, 0.0));
        assert_eq!(pointer.warps(), vec![Vec2::new(400.0, 300.0); 2]);
    }

    #[test]
    fn test_failed_grab_still_activates() {
        let pointer = RecordingPointer::refusing_grab();
        let mut c = SensitivityController::new(pointer.clone(), 800.0, 600.0, 1.0);
        c.activate();
        assert!(c.is_active());
        assert!(!pointer.is_cursor_visible());
    }

    #[test]
    fn test_drop_releases_capture() {
        let (mut c, pointer) = controller(1.0);
        c.activate();
        drop(c);
        assert!(!pointer.is_grabbed());
        assert!(pointer.is_cursor_visible());
    }

    #[test]
    fn test_drop_without_capture_does_nothing() {
        let (c, pointer) = controller(1.0);
        drop(c);
        assert!(pointer.calls().is_empty());
    }

    #[test]
    fn test_resize_moves_center_and_clamps_crosshair() {
        let (mut c, pointer) = controller(1.0);
        c.update(Vec2::new(350.0, 250.0));
        assert_eq!(c.crosshair(), Vec2::new(750.0, 550.0));

        c.resize(400.0, 300.0);
        assert_eq!(c.crosshair(), Vec2::new(400.0, 300.0));

        c.activate();
        assert_eq!(pointer.warps(), vec![Vec2::new(200.0, 150.0)]);
    }

    #[test]
    fn test_recenter() {
        let (mut c, _) = controller(1.0);
        c.update(Vec2::new(30.0, 30.0));
        c.recenter();
        assert_eq!(c.crosshair(), Vec2::new(400.0, 300.0));
    }
}

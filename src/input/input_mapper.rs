//! Input mapping from raw events to semantic actions
//!
//! Window callbacks use [`InputMapper`] to queue [`InputEvent`]s for the next
//! frame. Frames then map queued keys to menu or session actions.

use reflex_core::GameMode;
use reflex_input::InputEvent;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_LINE: f32 = 100.0;

/// Actions available on the mode selection screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// Start a session in the given mode (1, 2, 3)
    Start(GameMode),
    /// Start the highlighted mode (Enter or Space)
    StartSelected,
    /// Change sensitivity by this many notches ([ and ])
    AdjustSensitivity(f32),
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Quit,
}

/// Keyboard actions while a session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Leave the session (Escape)
    ReturnToMenu,
    /// Start another round after game over (R or Enter)
    Restart,
}

/// Maps raw input events to queued events and semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Queue a key press; releases and auto-repeat are dropped
    pub fn map_key(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if state != ElementState::Pressed || repeat {
            return None;
        }
        Some(InputEvent::KeyDown(key))
    }

    /// Queue a mouse button press
    pub fn map_mouse_button(button: MouseButton, state: ElementState) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        Some(InputEvent::MouseButtonDown(button))
    }

    /// Queue a wheel movement in notches
    pub fn map_scroll(delta: MouseScrollDelta) -> Option<InputEvent> {
        let notches = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
        if notches == 0.0 {
            return None;
        }
        Some(InputEvent::MouseWheel(notches))
    }

    /// Map a key on the mode selection screen
    pub fn map_menu_key(key: KeyCode) -> Option<MenuAction> {
        match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(MenuAction::Start(GameMode::SixShot)),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(MenuAction::Start(GameMode::QuickShot)),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(MenuAction::Start(GameMode::HeadShot)),
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Some(MenuAction::StartSelected),
            KeyCode::BracketLeft | KeyCode::Minus => Some(MenuAction::AdjustSensitivity(-1.0)),
            KeyCode::BracketRight | KeyCode::Equal => Some(MenuAction::AdjustSensitivity(1.0)),
            KeyCode::KeyF => Some(MenuAction::ToggleFullscreen),
            KeyCode::Escape => Some(MenuAction::Quit),
            _ => None,
        }
    }

    /// Map a key during a session
    pub fn map_session_key(key: KeyCode) -> Option<SessionAction> {
        match key {
            KeyCode::Escape => Some(SessionAction::ReturnToMenu),
            KeyCode::KeyR | KeyCode::Enter | KeyCode::NumpadEnter => Some(SessionAction::Restart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_key_press_queued() {
        assert_eq!(
            InputMapper::map_key(KeyCode::KeyR, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(KeyCode::KeyR))
        );
    }

    #[test]
    fn test_key_release_and_repeat_ignored() {
        assert_eq!(InputMapper::map_key(KeyCode::Escape, ElementState::Released, false), None);
        assert_eq!(InputMapper::map_key(KeyCode::Escape, ElementState::Pressed, true), None);
    }

    #[test]
    fn test_mouse_press_queued() {
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(InputEvent::MouseButtonDown(MouseButton::Left))
        );
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_scroll_line_and_pixel() {
        assert_eq!(
            InputMapper::map_scroll(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(InputEvent::MouseWheel(1.0))
        );
        assert_eq!(
            InputMapper::map_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -50.0))),
            Some(InputEvent::MouseWheel(-0.5))
        );
        assert_eq!(InputMapper::map_scroll(MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            InputMapper::map_menu_key(KeyCode::Digit1),
            Some(MenuAction::Start(GameMode::SixShot))
        );
        assert_eq!(
            InputMapper::map_menu_key(KeyCode::Digit2),
            Some(MenuAction::Start(GameMode::QuickShot))
        );
        assert_eq!(
            InputMapper::map_menu_key(KeyCode::Numpad3),
            Some(MenuAction::Start(GameMode::HeadShot))
        );
        assert_eq!(
            InputMapper::map_menu_key(KeyCode::BracketRight),
            Some(MenuAction::AdjustSensitivity(1.0))
        );
        assert_eq!(InputMapper::map_menu_key(KeyCode::Escape), Some(MenuAction::Quit));
        assert_eq!(InputMapper::map_menu_key(KeyCode::Space), Some(MenuAction::StartSelected));
        assert_eq!(InputMapper::map_menu_key(KeyCode::KeyW), None);
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            InputMapper::map_session_key(KeyCode::Escape),
            Some(SessionAction::ReturnToMenu)
        );
        for key in [KeyCode::KeyR, KeyCode::Enter, KeyCode::NumpadEnter] {
            assert_eq!(InputMapper::map_session_key(key), Some(SessionAction::Restart));
        }
        assert_eq!(InputMapper::map_session_key(KeyCode::Space), None);
    }
}

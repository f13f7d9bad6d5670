//! Per-frame aim session loop
//!
//! Each frame runs, in order:
//! 1. Queued input events (quit, menu, restart, clicks, wheel)
//! 2. Crosshair update from the frame's raw pointer motion
//! 3. Timer tick from wall-clock time since the round started
//! 4. On the game-over transition: record to the sink, release the pointer
//! 5. Snapshot for the renderer
//!
//! Losing window focus suspends pointer capture; motion is ignored until
//! focus returns.

use std::time::Instant;

use reflex_core::{
    FrameSnapshot, GameMode, ModeRules, Rect, ScoreRecordSink, SessionPhase, SessionState,
};
use reflex_input::{FrameInput, InputEvent, MouseButton, PointerDevice, SensitivityController};

use crate::input::{InputMapper, SessionAction};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// Back to mode selection
    ReturnToMenu,
    /// Close the application
    Quit,
}

impl SessionExit {
    /// Whether the application keeps running after this exit
    pub fn continue_to_menu(&self) -> bool {
        matches!(self, SessionExit::ReturnToMenu)
    }
}

/// Result of one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Continue(FrameSnapshot),
    Exit(SessionExit),
}

/// A running session: game state plus the pointer it owns
pub struct AimSession<P: PointerDevice> {
    state: SessionState,
    controller: SensitivityController<P>,
    started_at: Instant,
    suspended: bool,
}

impl<P: PointerDevice> AimSession<P> {
    /// Start a round at `now` and capture the pointer
    pub fn start(
        rules: ModeRules,
        device: P,
        width: u32,
        height: u32,
        sensitivity: f32,
        seed: u64,
        now: Instant,
    ) -> Self {
        let (w, h) = (width as f32, height as f32);
        let state = SessionState::new(rules, Rect::from_size(w, h), seed);
        let mut controller = SensitivityController::new(device, w, h, sensitivity);
        controller.activate();

        Self {
            state,
            controller,
            started_at: now,
            suspended: false,
        }
    }

    /// Advance one frame
    pub fn frame(
        &mut self,
        input: FrameInput,
        now: Instant,
        sink: &mut dyn ScoreRecordSink,
    ) -> FrameOutcome {
        for event in input.events {
            match event {
                InputEvent::Quit => return self.exit(SessionExit::Quit),
                InputEvent::KeyDown(key) => match InputMapper::map_session_key(key) {
                    Some(SessionAction::ReturnToMenu) => return self.exit(SessionExit::ReturnToMenu),
                    Some(SessionAction::Restart) => self.restart(now),
                    None => {}
                },
                InputEvent::MouseButtonDown(MouseButton::Left) => {
                    self.state.on_click(self.controller.crosshair());
                }
                InputEvent::MouseButtonDown(_) => {}
                InputEvent::MouseWheel(notches) => {
                    self.controller.adjust_by(notches);
                }
            }
        }

        if !self.state.is_game_over() && !self.suspended {
            self.controller.update(input.pointer_delta);
        }

        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        if let Some(record) = self.state.on_tick(elapsed) {
            let mode = self.state.mode();
            if let Err(e) = sink.append(mode.name(), record) {
                log::warn!("Could not save {} score: {}", mode, e);
            }
            self.controller.deactivate();
        }

        FrameOutcome::Continue(self.snapshot())
    }

    fn restart(&mut self, now: Instant) {
        if self.state.reset() {
            self.started_at = now;
            self.suspended = false;
            self.controller.recenter();
            self.controller.activate();
        }
    }

    /// Window lost focus: give the pointer back until [`Self::resume_capture`]
    pub fn suspend_capture(&mut self) {
        self.suspended = true;
        self.controller.deactivate();
    }

    /// Window regained focus: capture again if the round is still running
    pub fn resume_capture(&mut self) {
        self.suspended = false;
        if self.state.phase() == SessionPhase::Active {
            self.controller.activate();
        }
    }

    fn exit(&mut self, exit: SessionExit) -> FrameOutcome {
        self.controller.deactivate();
        log::info!("Leaving {} session: {:?}", self.state.mode(), exit);
        FrameOutcome::Exit(exit)
    }

    /// Window size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (w, h) = (width as f32, height as f32);
        self.state.resize(Rect::from_size(w, h));
        self.controller.resize(w, h);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.state
            .snapshot(self.controller.crosshair(), self.controller.sensitivity())
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn sensitivity(&self) -> f32 {
        self.controller.sensitivity()
    }

    pub fn is_capturing(&self) -> bool {
        self.controller.is_active()
    }
}

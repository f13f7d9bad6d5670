//! Mode selection screen
//!
//! The menu has no widgets: it holds the highlighted mode and the
//! sensitivity, and renders a one-line status for the window title.
//! History summaries are cached and only rebuilt by
//! [`ModeMenu::refresh_history`].

use reflex_core::{GameMode, HistorySummary, ScoreRecordSink};
use reflex_input::{MAX_SENSITIVITY, MIN_SENSITIVITY, WHEEL_STEP};

use crate::input::MenuAction;

/// What the application should do after a menu action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuCommand {
    StartSession(GameMode),
    SensitivityChanged(f32),
    ToggleFullscreen,
    Quit,
}

#[derive(Debug, Clone)]
pub struct ModeMenu {
    selected: GameMode,
    sensitivity: f32,
    /// One per mode, in `GameMode::ALL` order
    summaries: [HistorySummary; 3],
}

impl ModeMenu {
    pub fn new(selected: GameMode, sensitivity: f32) -> Self {
        Self {
            selected,
            sensitivity: sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY),
            summaries: [HistorySummary::default(); 3],
        }
    }

    /// Rebuild the per-mode summaries after the history changed
    pub fn refresh_history(&mut self, scores: &dyn ScoreRecordSink) {
        for (summary, mode) in self.summaries.iter_mut().zip(GameMode::ALL) {
            *summary = HistorySummary::from_records(&scores.history(mode.name()));
        }
    }

    pub fn apply(&mut self, action: MenuAction) -> MenuCommand {
        match action {
            MenuAction::Start(mode) => {
                self.selected = mode;
                MenuCommand::StartSession(mode)
            }
            MenuAction::StartSelected => MenuCommand::StartSession(self.selected),
            MenuAction::AdjustSensitivity(notches) => {
                self.sensitivity = (self.sensitivity + notches * WHEEL_STEP)
                    .clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
                MenuCommand::SensitivityChanged(self.sensitivity)
            }
            MenuAction::ToggleFullscreen => MenuCommand::ToggleFullscreen,
            MenuAction::Quit => MenuCommand::Quit,
        }
    }

    pub fn selected(&self) -> GameMode {
        self.selected
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Picks up a sensitivity changed during a session
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    }

    pub fn status_line(&self) -> String {
        let modes: Vec<String> = GameMode::ALL
            .iter()
            .zip(&self.summaries)
            .enumerate()
            .map(|(i, (mode, summary))| {
                let marker = if *mode == self.selected { "*" } else { "" };
                format!("{}{} {}{}", marker, i + 1, mode, describe(summary))
            })
            .collect();

        format!(
            "{} | Sensitivity: {:.1} ([ ]) | Enter to start, Esc to quit",
            modes.join("  "),
            self.sensitivity
        )
    }
}

fn describe(summary: &HistorySummary) -> String {
    match summary.last_score {
        None => String::new(),
        Some(last) => format!(
            " (best {}, last {}, {:.0}% avg over {})",
            summary.best_score, last, summary.mean_accuracy, summary.runs
        ),
    }
}

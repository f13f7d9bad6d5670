//! End-to-end tests of the frame loop without a window
//!
//! Drives `AimSession` with synthetic input and timestamps, a recording
//! pointer, and the JSON score store.

use std::time::{Duration, Instant};

use reflex::config::AppConfig;
use reflex::input::{InputMapper, MenuAction};
use reflex::menu::{MenuCommand, ModeMenu};
use reflex::settings::{JsonSensitivityStore, SensitivityStore};
use reflex::systems::{AimSession, FrameLimiter, FrameOutcome, SessionExit};
use reflex_core::{
    GameMode, HistorySummary, JsonScoreStore, MemoryScoreSink, ScoreRecordSink, SessionPhase, Vec2,
};
use reflex_input::{FrameInput, InputEvent, KeyCode, MouseButton, RecordingPointer};
use tempfile::tempdir;

const FRAME: Duration = Duration::from_nanos(16_666_667);

fn session(mode: GameMode, seed: u64, t0: Instant) -> (AimSession<RecordingPointer>, RecordingPointer) {
    let config = AppConfig::default();
    let pointer = RecordingPointer::new();
    let session = AimSession::start(
        config.session.rules_for(mode),
        pointer.clone(),
        1280,
        720,
        1.0,
        seed,
        t0,
    );
    (session, pointer)
}

/// Motion that puts the crosshair on the first target
fn aim_at_first_target(session: &AimSession<RecordingPointer>) -> Vec2 {
    let snapshot = session.snapshot();
    let target = snapshot.targets[0].position();
    (target - snapshot.crosshair) * (1.0 / snapshot.sensitivity)
}

fn click() -> InputEvent {
    InputEvent::MouseButtonDown(MouseButton::Left)
}

#[test]
fn test_full_round_records_score() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let mut store = JsonScoreStore::open(&path);

    let t0 = Instant::now();
    let (mut session, pointer) = session(GameMode::QuickShot, 11, t0);
    let mut now = t0;

    // Three hits, each aimed on the frame before the click
    for _ in 0..3 {
        let aim = aim_at_first_target(&session);
        session.frame(FrameInput::new().with_motion(aim), now, &mut store);
        now += FRAME;
        session.frame(FrameInput::new().with_event(click()), now, &mut store);
        now += FRAME;
    }
    // Two misses far from the target
    let away = Vec2::new(-2000.0, -2000.0);
    session.frame(FrameInput::new().with_motion(away), now, &mut store);
    for _ in 0..2 {
        session.frame(FrameInput::new().with_event(click()), now, &mut store);
    }

    let stats = *session.state().stats();
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.shots_fired, 5);
    assert_eq!(stats.score, 1400);

    let outcome = session.frame(FrameInput::new(), t0 + Duration::from_secs(60), &mut store);
    let FrameOutcome::Continue(snapshot) = outcome else {
        panic!("session should still be running");
    };
    assert_eq!(snapshot.phase, SessionPhase::GameOver);
    assert!(snapshot.hud_line().contains("Final score"));
    assert!(!pointer.is_grabbed());

    let reopened = JsonScoreStore::open(&path);
    let history = reopened.history("QuickShot");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 1400);
    assert_eq!(history[0].accuracy_percent, 60.0);
}

#[test]
fn test_restart_plays_second_round() {
    let t0 = Instant::now();
    let (mut session, _) = session(GameMode::SixShot, 3, t0);
    let mut sink = MemoryScoreSink::new();

    session.frame(FrameInput::new(), t0 + Duration::from_secs(60), &mut sink);
    let restart = FrameInput::new().with_event(InputEvent::KeyDown(KeyCode::KeyR));
    let t1 = t0 + Duration::from_secs(62);
    session.frame(restart, t1, &mut sink);
    assert_eq!(session.state().phase(), SessionPhase::Active);
    assert_eq!(session.snapshot().crosshair, Vec2::new(640.0, 360.0));

    session.frame(FrameInput::new(), t1 + Duration::from_secs(60), &mut sink);

    let summary = HistorySummary::from_records(&sink.history("SixShot"));
    assert_eq!(summary.runs, 2);
    assert_eq!(summary.last_score, Some(0));
}

#[test]
fn test_menu_to_session_and_back() {
    let dir = tempdir().unwrap();
    let settings = JsonSensitivityStore::with_path(dir.path().join("settings.json"));
    let mut menu = ModeMenu::new(GameMode::SixShot, 1.0);

    let action = InputMapper::map_menu_key(KeyCode::BracketRight).unwrap();
    if let MenuCommand::SensitivityChanged(value) = menu.apply(action) {
        settings.save(value).unwrap();
    }
    assert_eq!(settings.load(), Some(menu.sensitivity()));

    let command = menu.apply(MenuAction::Start(GameMode::HeadShot));
    assert_eq!(command, MenuCommand::StartSession(GameMode::HeadShot));

    let t0 = Instant::now();
    let pointer = RecordingPointer::new();
    let mut session = AimSession::start(
        AppConfig::default().session.rules_for(menu.selected()),
        pointer.clone(),
        800,
        600,
        menu.sensitivity(),
        5,
        t0,
    );
    let mut sink = MemoryScoreSink::new();

    let wheel_down = FrameInput::new().with_event(InputEvent::MouseWheel(-3.0));
    session.frame(wheel_down, t0, &mut sink);
    let escape = FrameInput::new().with_event(InputEvent::KeyDown(KeyCode::Escape));
    let outcome = session.frame(escape, t0 + FRAME, &mut sink);

    assert_eq!(outcome, FrameOutcome::Exit(SessionExit::ReturnToMenu));
    assert!(!pointer.is_grabbed());
    assert!(pointer.is_cursor_visible());
    assert!(sink.is_empty());

    menu.set_sensitivity(session.sensitivity());
    assert!((menu.sensitivity() - 0.8).abs() < 1e-5);
}

#[test]
fn test_headshot_targets_stay_on_guide_line() {
    let t0 = Instant::now();
    let (mut session, _) = session(GameMode::HeadShot, 21, t0);
    let mut sink = MemoryScoreSink::new();
    let line = session.snapshot().guide_line_y.unwrap();

    for i in 0..10 {
        let now = t0 + FRAME * (i * 2);
        let aim = aim_at_first_target(&session);
        session.frame(FrameInput::new().with_motion(aim), now, &mut sink);
        session.frame(FrameInput::new().with_event(click()), now + FRAME, &mut sink);
        assert_eq!(session.snapshot().targets[0].y, line);
    }
    assert_eq!(session.state().stats().hits, 10);
}

#[test]
fn test_limiter_paces_sixty_frames_per_second() {
    let t0 = Instant::now();
    let mut limiter = FrameLimiter::new(60, t0);
    let mut frames = 0;
    let mut now = t0;
    while now < t0 + Duration::from_secs(1) {
        if limiter.tick(now) {
            frames += 1;
        }
        now += Duration::from_millis(1);
    }
    assert!((59..=61).contains(&frames), "got {} frames", frames);
}

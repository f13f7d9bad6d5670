//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;

use reflex::config::AppConfig;
use reflex_core::GameMode;
use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("REFLEX_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("REFLEX_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_shipped_defaults_match_code_defaults() {
    std::env::remove_var("REFLEX_WINDOW__TITLE");

    let dir = tempdir().unwrap();
    let config = AppConfig::load_from(dir.path()).unwrap();
    let shipped = AppConfig::load_from("config").unwrap();

    assert_eq!(shipped.window.title, config.window.title);
    assert_eq!(shipped.session.hit_score, config.session.hit_score);
    assert_eq!(shipped.session.miss_penalty, config.session.miss_penalty);
    assert_eq!(shipped.session.duration_secs, config.session.duration_secs);
    assert_eq!(shipped.input.sensitivity, config.input.sensitivity);
    assert_eq!(shipped.storage.scores_path, config.storage.scores_path);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[session]\ndefault_mode = \"QuickShot\"\nduration_secs = 60.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("user.toml"),
        "[session]\nduration_secs = 30.0\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.session.default_mode(), GameMode::QuickShot);
    assert_eq!(config.session.duration_secs, 30.0);
    assert_eq!(config.session.rules_for(GameMode::HeadShot).duration_secs, 30.0);
}

#[test]
#[serial]
fn test_env_beats_user_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("user.toml"), "[input]\nsensitivity = 0.5\n").unwrap();

    std::env::set_var("REFLEX_INPUT__SENSITIVITY", "1.5");
    let config = AppConfig::load_from(dir.path()).unwrap();
    std::env::remove_var("REFLEX_INPUT__SENSITIVITY");

    assert_eq!(config.input.sensitivity, 1.5);
}

#[test]
#[serial]
fn test_out_of_range_values_sanitized() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("user.toml"),
        "[input]\nsensitivity = 9.0\n\n[window]\nwidth = 0\n\n[session]\ndefault_mode = \"Sniper\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap().sanitized();
    assert_eq!(config.input.sensitivity, 2.0);
    assert!(config.window.width > 0);
    assert_eq!(config.session.default_mode(), GameMode::SixShot);
}

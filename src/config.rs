//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`REFLEX_SECTION__KEY`)

use std::path::{Path, PathBuf};

use figment::{Figment, providers::{Format, Toml, Env}};
use reflex_core::{GameMode, ModeRules};
use reflex_input::{DEFAULT_SENSITIVITY, MAX_SENSITIVITY, MIN_SENSITIVITY};
use reflex_render::scene::{rgb8, RenderStyle};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Smallest grid spacing in pixels; finer grids are raised to this
pub const MIN_GRID_SIZE: f32 = 4.0;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Session rules
    #[serde(default)]
    pub session: SessionConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Where scores and settings are stored
    #[serde(default)]
    pub storage: StorageConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`REFLEX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // REFLEX_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("REFLEX_").split("__"));

        Ok(figment.extract()?)
    }

    /// Clamp out-of-range values, logging each correction
    pub fn sanitized(mut self) -> Self {
        let defaults = AppConfig::default();

        if self.window.width == 0 || self.window.height == 0 {
            log::warn!(
                "Window size {}x{} is invalid, using {}x{}",
                self.window.width,
                self.window.height,
                defaults.window.width,
                defaults.window.height
            );
            self.window.width = defaults.window.width;
            self.window.height = defaults.window.height;
        }

        self.input.sensitivity = clamp_sensitivity(self.input.sensitivity);

        if self.session.default_mode.parse::<GameMode>().is_err() {
            log::warn!(
                "Unknown default mode {:?}, using {}",
                self.session.default_mode,
                defaults.session.default_mode
            );
            self.session.default_mode = defaults.session.default_mode;
        }
        if self.session.duration_secs.is_nan() || self.session.duration_secs <= 0.0 {
            log::warn!(
                "Session duration {} is invalid, using {}",
                self.session.duration_secs,
                defaults.session.duration_secs
            );
            self.session.duration_secs = defaults.session.duration_secs;
        }
        if self.session.max_placement_attempts == 0 {
            log::warn!("max_placement_attempts must be at least 1");
            self.session.max_placement_attempts = 1;
        }
        if self.session.frame_rate == 0 {
            log::warn!("Frame rate 0 is invalid, using {}", defaults.session.frame_rate);
            self.session.frame_rate = defaults.session.frame_rate;
        }

        if !(0.0..=1.0).contains(&self.rendering.overlay_alpha) {
            log::warn!("Overlay alpha {} clamped to [0, 1]", self.rendering.overlay_alpha);
            self.rendering.overlay_alpha = self.rendering.overlay_alpha.clamp(0.0, 1.0);
        }
        if self.rendering.grid_size.is_nan() || self.rendering.grid_size < 0.0 {
            self.rendering.grid_size = 0.0;
        } else if self.rendering.grid_size > 0.0 && self.rendering.grid_size < MIN_GRID_SIZE {
            log::warn!(
                "Grid size {} is too fine, using {}",
                self.rendering.grid_size,
                MIN_GRID_SIZE
            );
            self.rendering.grid_size = MIN_GRID_SIZE;
        }

        self
    }
}

/// Clamp a sensitivity value to the supported range
///
/// NaN falls back to the default.
pub fn clamp_sensitivity(value: f32) -> f32 {
    if value.is_nan() {
        log::warn!("Sensitivity is not a number, using {}", DEFAULT_SENSITIVITY);
        return DEFAULT_SENSITIVITY;
    }
    let clamped = value.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    if clamped != value {
        log::warn!(
            "Sensitivity {} out of range, clamped to {} (allowed {}..={})",
            value,
            clamped,
            MIN_SENSITIVITY,
            MAX_SENSITIVITY
        );
    }
    clamped
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Reflex - Aim Trainer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Crosshair pixels per raw mouse count, used when no saved setting exists
    pub sensitivity: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// Session rules shared by every mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Mode selected when the menu opens
    pub default_mode: String,
    /// Round length in seconds
    pub duration_secs: f32,
    pub hit_score: u64,
    pub miss_penalty: u64,
    /// Draws per target before placement gives up on separation
    pub max_placement_attempts: u32,
    /// Frames per second
    pub frame_rate: u32,
    /// Fixed RNG seed for reproducible layouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_mode: GameMode::SixShot.name().to_string(),
            duration_secs: ModeRules::DEFAULT_DURATION_SECS,
            hit_score: ModeRules::DEFAULT_HIT_SCORE,
            miss_penalty: ModeRules::DEFAULT_MISS_PENALTY,
            max_placement_attempts: 1000,
            frame_rate: 60,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// The configured default mode, falling back to SixShot
    pub fn default_mode(&self) -> GameMode {
        self.default_mode.parse().unwrap_or(GameMode::SixShot)
    }

    /// Stock rules for `mode` with the configured overrides applied
    pub fn rules_for(&self, mode: GameMode) -> ModeRules {
        ModeRules::for_mode(mode)
            .with_duration(self.duration_secs)
            .with_scoring(self.hit_score, self.miss_penalty)
            .with_max_attempts(self.max_placement_attempts)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b]
    pub background_color: [u8; 3],
    pub grid_color: [u8; 3],
    /// Grid spacing in pixels, 0 to disable
    pub grid_size: f32,
    /// HeadShot height marker
    pub guide_line_color: [u8; 3],
    pub target_color: [u8; 3],
    pub crosshair_color: [u8; 3],
    /// Crosshair arm length in pixels
    pub crosshair_size: f32,
    pub crosshair_thickness: f32,
    /// Opacity of the game-over overlay
    pub overlay_alpha: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [70, 70, 70],
            grid_color: [40, 40, 40],
            grid_size: 50.0,
            guide_line_color: [60, 60, 60],
            target_color: [255, 50, 50],
            crosshair_color: [255, 255, 255],
            crosshair_size: 6.0,
            crosshair_thickness: 2.0,
            overlay_alpha: 0.5,
        }
    }
}

impl RenderingConfig {
    pub fn style(&self) -> RenderStyle {
        RenderStyle {
            background: rgb8(self.background_color),
            grid: rgb8(self.grid_color),
            grid_size: self.grid_size,
            guide_line: rgb8(self.guide_line_color),
            guide_line_thickness: 2.0,
            target: rgb8(self.target_color),
            crosshair: rgb8(self.crosshair_color),
            crosshair_size: self.crosshair_size,
            crosshair_thickness: self.crosshair_thickness,
            overlay: [0.0, 0.0, 0.0, self.overlay_alpha],
        }
    }
}

/// Persistence locations, relative to the working directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub scores_path: PathBuf,
    pub settings_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from("data/scores.json"),
            settings_path: PathBuf::from("data/settings.json"),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}

//! Reflex - Aim Trainer
//!
//! Pick a mode from the title-bar menu, then click targets with a crosshair
//! driven by raw mouse motion.

use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use reflex::config::{clamp_sensitivity, AppConfig};
use reflex::input::InputMapper;
use reflex::menu::{MenuCommand, ModeMenu};
use reflex::settings::{JsonSensitivityStore, SensitivityStore};
use reflex::systems::{AimSession, FrameLimiter, FrameOutcome, RenderSystem, SessionExit, WindowSystem};
use reflex_core::{GameMode, JsonScoreStore, Rect, Vec2};
use reflex_input::{FrameInput, InputEvent, WindowPointer};
use reflex_render::{RenderError, RenderStyle, ShapeBatch};

enum Screen {
    Menu,
    Session(AimSession<WindowPointer>),
}

/// Main application state
struct App {
    config: AppConfig,
    style: RenderStyle,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    screen: Screen,
    menu: ModeMenu,
    /// Input queued by window callbacks, drained at the next frame
    pending: FrameInput,
    limiter: FrameLimiter,
    batch: ShapeBatch,
    status: String,
    scores: JsonScoreStore,
    settings: JsonSensitivityStore,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scores = JsonScoreStore::open(&config.storage.scores_path);
        let settings = JsonSensitivityStore::with_path(&config.storage.settings_path);
        let sensitivity = clamp_sensitivity(settings.load().unwrap_or(config.input.sensitivity));
        log::info!("Sensitivity {:.1}", sensitivity);

        let mut menu = ModeMenu::new(config.session.default_mode(), sensitivity);
        menu.refresh_history(&scores);
        let limiter = FrameLimiter::new(config.session.frame_rate, Instant::now());

        Self {
            style: config.rendering.style(),
            config,
            window: None,
            renderer: None,
            screen: Screen::Menu,
            menu,
            pending: FrameInput::new(),
            limiter,
            batch: ShapeBatch::default(),
            status: String::new(),
            scores,
            settings,
        }
    }

    /// Run one frame of whichever screen is active
    fn step(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let input = self.pending.take();

        if let Screen::Session(session) = &mut self.screen {
            match session.frame(input, now, &mut self.scores) {
                FrameOutcome::Continue(snapshot) => {
                    self.batch = ShapeBatch::from_snapshot(&snapshot, &self.style);
                    self.set_status(snapshot.hud_line());
                }
                FrameOutcome::Exit(exit) => self.end_session(event_loop, exit),
            }
        } else {
            self.step_menu(event_loop, input, now);
        }
    }

    fn step_menu(&mut self, event_loop: &ActiveEventLoop, input: FrameInput, now: Instant) {
        for event in input.events {
            let action = match event {
                InputEvent::Quit => {
                    event_loop.exit();
                    return;
                }
                InputEvent::KeyDown(key) => InputMapper::map_menu_key(key),
                _ => None,
            };
            let Some(action) = action else { continue };

            match self.menu.apply(action) {
                MenuCommand::StartSession(mode) => {
                    if self.start_session(mode, now) {
                        return;
                    }
                }
                MenuCommand::SensitivityChanged(sensitivity) => self.save_sensitivity(sensitivity),
                MenuCommand::ToggleFullscreen => {
                    if let Some(window) = &self.window {
                        window.toggle_fullscreen();
                    }
                }
                MenuCommand::Quit => {
                    event_loop.exit();
                    return;
                }
            }
        }

        if let Some(window) = &self.window {
            let (w, h) = window.size();
            self.batch = ShapeBatch::backdrop(Rect::from_size(w as f32, h as f32), &self.style);
        }
        let status = self.menu.status_line();
        self.set_status(status);
    }

    fn start_session(&mut self, mode: GameMode, now: Instant) -> bool {
        let Some(window) = &self.window else {
            return false;
        };
        let (width, height) = window.size();
        if width == 0 || height == 0 {
            log::warn!("Window has no area, not starting {}", mode);
            return false;
        }

        let seed = self.config.session.seed.unwrap_or_else(rand::random);
        let rules = self.config.session.rules_for(mode);
        log::info!("Starting {} ({}x{}, seed {})", mode, width, height, seed);

        let session = AimSession::start(
            rules,
            WindowPointer::new(window.window().clone()),
            width,
            height,
            self.menu.sensitivity(),
            seed,
            now,
        );
        self.screen = Screen::Session(session);
        true
    }

    fn end_session(&mut self, event_loop: &ActiveEventLoop, exit: SessionExit) {
        if let Screen::Session(session) = std::mem::replace(&mut self.screen, Screen::Menu) {
            let sensitivity = session.sensitivity();
            drop(session);
            self.menu.refresh_history(&self.scores);
            if sensitivity != self.menu.sensitivity() {
                self.menu.set_sensitivity(sensitivity);
                self.save_sensitivity(sensitivity);
            }
        }
        if !exit.continue_to_menu() {
            event_loop.exit();
        }
    }

    fn save_sensitivity(&self, sensitivity: f32) {
        if let Err(e) = self.settings.save(sensitivity) {
            log::warn!("Could not save sensitivity: {}", e);
        }
    }

    fn set_status(&mut self, status: String) {
        if status == self.status {
            return;
        }
        if let Some(window) = &self.window {
            window.set_status(&status);
        }
        self.status = status;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.pending.push(InputEvent::Quit);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
                if let Screen::Session(session) = &mut self.screen {
                    session.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(focused) => {
                if let Screen::Session(session) = &mut self.screen {
                    if focused {
                        session.resume_capture();
                    } else {
                        session.suspend_capture();
                        self.pending.pointer_delta = Vec2::ZERO;
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(input) = InputMapper::map_key(key, event.state, event.repeat) {
                        self.pending.push(input);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(input) = InputMapper::map_mouse_button(button, state) {
                    self.pending.push(input);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(input) = InputMapper::map_scroll(delta) {
                    self.pending.push(input);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    match renderer.render_frame(&self.batch) {
                        Ok(()) => {}
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("{}", e),
                    }
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let (DeviceEvent::MouseMotion { delta }, Screen::Session(_)) = (event, &self.screen) {
            self.pending
                .add_motion(Vec2::new(delta.0 as f32, delta.1 as f32));
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.limiter.tick(now) {
            self.step(event_loop, now);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.limiter.next_deadline()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Screen::Session(session) = std::mem::replace(&mut self.screen, Screen::Menu) {
            self.save_sensitivity(session.sensitivity());
        }
        log::info!("Shutting down");
    }
}

fn main() {
    let loaded = AppConfig::load();

    let log_level = loaded
        .as_ref()
        .map(|config| config.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Reflex");

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    }
    .sanitized();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}

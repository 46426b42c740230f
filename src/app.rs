//! Window and event loop
//!
//! Owns the winit application lifecycle:
//! - creating the fixed-size window and the renderer
//! - driving the tick clock from wall time
//! - routing SPACE / H to the pause and overlay toggles
//!
//! Everything that does not need a window lives in [`Controller`] so it can be
//! exercised directly.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use log::{debug, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::clock::TickClock;
use crate::consts::WINDOW_SIZE;
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::{AnimEvent, AnimState, tick};

pub const WINDOW_TITLE: &str = "Loading Animation";

/// What a key press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePause,
    ToggleOverlay,
}

impl KeyAction {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Space => Some(KeyAction::TogglePause),
            KeyCode::KeyH => Some(KeyAction::ToggleOverlay),
            _ => None,
        }
    }
}

/// Animation state plus its timer, independent of any window
pub struct Controller {
    pub state: AnimState,
    pub clock: TickClock,
}

impl Controller {
    pub fn new(settings: &Settings) -> Self {
        let mut state = AnimState::new();
        state.overlay_visible = settings.show_overlay;
        state.paused = settings.start_paused;
        Self {
            state,
            clock: TickClock::new(
                settings.tick_period(),
                settings.start_delay(),
                settings.max_ticks_per_frame,
            ),
        }
    }

    /// Run every tick that is due after `elapsed`; returns true if a repaint is needed
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let due = self.clock.advance(elapsed);
        let mut redraw = false;
        for _ in 0..due {
            let outcome = tick(&mut self.state);
            redraw |= outcome.redraw;
            for event in &outcome.events {
                log_event(self.state.elapsed_ticks, event);
            }
        }
        redraw
    }

    /// Apply a key action; the caller always repaints afterwards
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::TogglePause => {
                let paused = self.state.toggle_pause();
                info!("Paused: {}", paused);
            }
            KeyAction::ToggleOverlay => {
                let visible = self.state.toggle_overlay();
                debug!("Overlay visible: {}", visible);
            }
        }
    }
}

fn log_event(elapsed: u64, event: &AnimEvent) {
    match event {
        AnimEvent::BallReentered(direction) => {
            debug!("[{}] ball re-entered heading {}", elapsed, direction)
        }
        AnimEvent::FlashSpawned { palette_index } => {
            debug!("[{}] flash spawned with palette entry {}", elapsed, palette_index)
        }
        AnimEvent::BackgroundCommitted(color) => {
            debug!("[{}] background committed: {:?}", elapsed, color)
        }
        AnimEvent::ColorsSwitched(switched) => {
            log::trace!("[{}] square colors switched: {}", elapsed, switched)
        }
        AnimEvent::RotationStarted(phase) => debug!("[{}] rotation started: {:?}", elapsed, phase),
        AnimEvent::RotationFinished { flipped } => {
            debug!("[{}] rotation finished, flipped: {}", elapsed, flipped)
        }
    }
}

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> anyhow::Result<()> {
    settings.validate()?;

    let event_loop = EventLoop::new().context("winit: failed to create EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .context("winit: run_app failed")?;

    if let Some(err) = app.error.take() {
        return Err(err);
    }

    debug!(
        "Final state: {}",
        serde_json::to_string(&app.controller.state).unwrap_or_default()
    );
    info!("Window closed after {} ticks", app.controller.state.elapsed_ticks);
    Ok(())
}

struct App {
    settings: Settings,
    controller: Controller,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    last_update: Option<Instant>,
    /// Fatal error raised inside a callback, reported once the loop exits
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            controller: Controller::new(&settings),
            settings,
            window: None,
            render_state: None,
            last_update: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let size = WINDOW_SIZE as f64;
        let window = Arc::new(
            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(WINDOW_TITLE)
                        .with_inner_size(LogicalSize::new(size, size))
                        .with_resizable(false),
                )
                .context("winit: failed to create window")?,
        );

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.settings))
            .context("failed to initialize renderer")?;

        window.request_redraw();
        self.window = Some(window);
        self.render_state = Some(render_state);
        self.last_update = Some(Instant::now());
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{:#}", err);
        self.error = Some(err);
        self.render_state = None;
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        if let Some(action) = KeyAction::from_key(code) {
            self.controller.apply(action);
            self.request_redraw();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(&self.controller.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
                self.request_redraw();
            }
            Err(wgpu::SurfaceError::Timeout) => warn!("Surface timeout; skipping frame"),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("wgpu SurfaceError::OutOfMemory"));
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        info!("Loading Animation starting...");
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested; exiting");
                self.render_state = None;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
                self.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(last) = self.last_update else {
            return;
        };
        let now = Instant::now();
        self.last_update = Some(now);

        if self.controller.advance(now - last) {
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            now + self.controller.clock.time_until_next(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn immediate_settings() -> Settings {
        Settings {
            start_delay_ms: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(KeyAction::from_key(KeyCode::Space), Some(KeyAction::TogglePause));
        assert_eq!(KeyAction::from_key(KeyCode::KeyH), Some(KeyAction::ToggleOverlay));
        assert_eq!(KeyAction::from_key(KeyCode::KeyP), None);
        assert_eq!(KeyAction::from_key(KeyCode::Escape), None);
    }

    #[test]
    fn test_controller_honors_initial_toggles() {
        let settings = Settings {
            show_overlay: false,
            start_paused: true,
            ..Default::default()
        };
        let controller = Controller::new(&settings);
        assert!(!controller.state.overlay_visible);
        assert!(controller.state.paused);
    }

    #[test]
    fn test_controller_ticks_on_schedule() {
        let mut controller = Controller::new(&immediate_settings());
        assert!(!controller.advance(Duration::from_millis(4)));
        assert_eq!(controller.state.elapsed_ticks, 0);

        assert!(controller.advance(Duration::from_millis(11)));
        assert_eq!(controller.state.elapsed_ticks, 3);
        assert_eq!(controller.state.ball.x, -22);
    }

    #[test]
    fn test_start_delay_holds_first_tick() {
        let mut controller = Controller::new(&Settings::default());
        assert!(!controller.advance(Duration::from_millis(999)));
        assert_eq!(controller.state.elapsed_ticks, 0);
        assert!(controller.advance(Duration::from_millis(1)));
        assert_eq!(controller.state.elapsed_ticks, 1);
    }

    #[test]
    fn test_paused_ticks_do_not_request_redraw() {
        let mut controller = Controller::new(&immediate_settings());
        controller.apply(KeyAction::TogglePause);
        assert!(!controller.advance(Duration::from_millis(20)));
        assert_eq!(controller.state.elapsed_ticks, 4);
        assert_eq!(controller.state.ball.x, -25);

        controller.apply(KeyAction::TogglePause);
        assert!(controller.advance(Duration::from_millis(5)));
        assert_eq!(controller.state.ball.x, -24);
    }

    #[test]
    fn test_overlay_toggle() {
        let mut controller = Controller::new(&immediate_settings());
        controller.apply(KeyAction::ToggleOverlay);
        assert!(!controller.state.overlay_visible);
        controller.apply(KeyAction::ToggleOverlay);
        assert!(controller.state.overlay_visible);
    }
}

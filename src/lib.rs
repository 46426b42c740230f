//! Loading Animation - a small looping 2D animation
//!
//! Core modules:
//! - `sim`: Per-tick animation state machine (no rendering, no platform types)
//! - `renderer`: Scene painting onto a `Canvas`, tessellation, wgpu pipeline
//! - `clock`: Fixed-period tick scheduling
//! - `app`: winit window and event loop
//! - `settings`: Runtime configuration

pub mod app;
pub mod clock;
pub mod palette;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use palette::Rgb;
pub use settings::{Settings, SettingsError};

/// Animation configuration constants
pub mod consts {
    /// Width and height of the window, in pixels
    pub const WINDOW_SIZE: i32 = 500;
    /// Width and height of each sliding square
    pub const SQUARE_SIZE: i32 = 25;
    /// Gap between the line and each square
    pub const SQUARE_SPACING: i32 = 10;
    /// Line dimensions
    pub const LINE_WIDTH: i32 = 100;
    pub const LINE_HEIGHT: i32 = 10;
    /// Width and height of the ball
    pub const BALL_SIZE: i32 = 25;

    /// A flash circle is spawned every this many ticks
    pub const FLASH_INTERVAL_TICKS: u64 = 500;
    /// The flash circle is retired once its width reaches `WINDOW_SIZE + FLASH_OVERSHOOT`
    pub const FLASH_OVERSHOOT: i32 = 250;

    /// Background circle width bounds, relative to the line width
    pub const CIRCLE_MAX_EXTRA: i32 = 150;
    pub const CIRCLE_MIN_EXTRA: i32 = 70;

    /// Angle where the forward half-rotation ends (degrees)
    pub const HALF_TURN: f64 = 180.0;
    /// Angle where the back half-rotation ends and wraps to zero (degrees)
    pub const FULL_TURN: f64 = 360.0;
    /// Rotation step per tick (degrees)
    pub const ROTATION_STEP: f64 = 1.0;

    /// Border stroke widths around the background circle
    pub const THIN_BORDER: i32 = 10;
    pub const THICK_BORDER: i32 = 25;
}

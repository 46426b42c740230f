//! Animation state and core types
//!
//! Everything the tick function mutates and the renderer reads lives in
//! [`AnimState`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pulse::{Pulse, PulseDirection};
use super::rect::Rect;
use crate::consts::*;
use crate::palette::{self, PALETTE, Rgb};

/// Direction the ball is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Next direction in the fixed cycle RIGHT -> DOWN -> LEFT -> UP -> RIGHT
    pub fn next(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    /// One-pixel step as (dx, dy), y pointing down
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line/square rotation sequencing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlipPhase {
    /// Squares slide along the line; angle is constant
    #[default]
    Moving,
    /// Squares halted, angle advancing toward 180
    RotatingForward,
    /// Squares halted, angle advancing toward 360 (then wraps to 0)
    RotatingBack,
}

/// Notable transitions reported by a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimEvent {
    /// Ball left the window and re-entered heading in the given direction
    BallReentered(Direction),
    /// New flash circle spawned with the given palette entry
    FlashSpawned { palette_index: usize },
    /// Flash circle left the window; its color is now the background
    BackgroundCommitted(Rgb),
    /// Square colors toggled (new value of the switched flag)
    ColorsSwitched(bool),
    /// Squares halted and a half-rotation began
    RotationStarted(FlipPhase),
    /// Half-rotation finished and squares resumed
    RotationFinished { flipped: bool },
}

/// Complete animation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimState {
    /// Ticks received, including paused ones
    pub elapsed_ticks: u64,
    /// Tick handler is suspended
    pub paused: bool,
    /// Text overlay is drawn
    pub overlay_visible: bool,

    /// The line the squares slide along (rotation pivot is its center)
    pub line: Rect,
    pub square_a: Rect,
    pub square_b: Rect,
    /// Squares have completed a half-rotation and move mirrored
    pub flipped: bool,
    /// Square fill colors are swapped
    pub colors_switched: bool,
    pub flip_phase: FlipPhase,
    /// Rotation of the line group in degrees, [0, 360)
    pub angle: f64,

    /// Breathing background circle
    pub circle: Rect,
    pub circle_pulse: Pulse,
    pub circle_direction: PulseDirection,
    /// Ball overlaps the background circle this tick
    pub circle_thick_border: bool,

    /// Expanding full-screen flash circle, if one is animating
    pub flash: Option<Rect>,
    /// Current palette entry (flash color)
    pub palette_index: usize,
    /// Color chosen at the last flash spawn, committed when that flash retires
    pub pending_background: Rgb,
    /// Committed window background color
    pub background: Rgb,

    pub ball: Rect,
    pub ball_direction: Direction,
}

impl Default for AnimState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimState {
    /// State at startup
    pub fn new() -> Self {
        let line = Rect::new(
            WINDOW_SIZE / 2 - LINE_WIDTH / 2,
            WINDOW_SIZE / 2 - 20,
            LINE_WIDTH,
            LINE_HEIGHT,
        );
        let (square_a, square_b) = Self::square_home_positions(&line);
        let circle = Rect::new(
            line.x - 30,
            line.y - line.width / 2 - 30,
            line.width + 60,
            line.width + 70,
        );

        Self {
            elapsed_ticks: 0,
            paused: false,
            overlay_visible: true,
            line,
            square_a,
            square_b,
            flipped: false,
            colors_switched: false,
            flip_phase: FlipPhase::Moving,
            angle: 0.0,
            circle,
            circle_pulse: Pulse::new(line.width + CIRCLE_MIN_EXTRA, line.width + CIRCLE_MAX_EXTRA),
            circle_direction: PulseDirection::Growing,
            circle_thick_border: false,
            flash: None,
            palette_index: 0,
            pending_background: palette::INITIAL_BACKGROUND,
            background: palette::INITIAL_BACKGROUND,
            ball: Rect::new(-BALL_SIZE, WINDOW_SIZE / 2 - BALL_SIZE, BALL_SIZE, BALL_SIZE),
            ball_direction: Direction::Right,
        }
    }

    /// Square A above the left end of the line, square B below the right end
    fn square_home_positions(line: &Rect) -> (Rect, Rect) {
        let a = Rect::new(
            line.x,
            line.y - SQUARE_SIZE - SQUARE_SPACING,
            SQUARE_SIZE,
            SQUARE_SIZE,
        );
        let b = Rect::new(
            line.right() - SQUARE_SIZE,
            line.bottom() + SQUARE_SPACING,
            SQUARE_SIZE,
            SQUARE_SIZE,
        );
        (a, b)
    }

    /// Leftmost x a square can occupy on the line
    #[inline]
    pub fn track_start(&self) -> i32 {
        self.line.x
    }

    /// Rightmost x a square can occupy on the line
    #[inline]
    pub fn track_end(&self) -> i32 {
        self.line.right() - SQUARE_SIZE
    }

    /// Squares advance this tick (not halted mid-rotation)
    #[inline]
    pub fn squares_moving(&self) -> bool {
        self.flip_phase == FlipPhase::Moving
    }

    /// Flash/background color currently selected
    #[inline]
    pub fn current_color(&self) -> Rgb {
        PALETTE[self.palette_index % PALETTE.len()]
    }

    /// Toggle pause; returns the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Toggle the text overlay; returns the new value
    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay_visible = !self.overlay_visible;
        self.overlay_visible
    }
}

//! Animation state machine
//!
//! All motion logic lives here. This module must stay pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Integer pixel geometry
//! - No rendering or platform dependencies

pub mod pulse;
pub mod rect;
pub mod state;
pub mod tick;

pub use pulse::{Pulse, PulseDirection};
pub use rect::Rect;
pub use state::{AnimEvent, AnimState, Direction, FlipPhase};
pub use tick::{TickOutcome, tick};

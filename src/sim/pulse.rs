//! Grow/shrink stepping shared by the background circle and the flash circle

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Which way a pulsing shape is currently heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PulseDirection {
    Growing,
    Shrinking,
}

/// Width bounds for a breathing shape (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pulse {
    pub min_width: i32,
    pub max_width: i32,
}

impl Pulse {
    pub const fn new(min_width: i32, max_width: i32) -> Self {
        Self {
            min_width,
            max_width,
        }
    }

    /// Advance `bounds` one step in `direction`.
    ///
    /// When the width already sits on the bound for the current direction the
    /// direction flips and the bounds are left alone for this step, so each
    /// bound is held for exactly one tick.
    pub fn step(&self, bounds: &mut Rect, direction: PulseDirection) -> PulseDirection {
        match direction {
            PulseDirection::Growing => {
                if bounds.width >= self.max_width {
                    return PulseDirection::Shrinking;
                }
                grow(bounds);
                PulseDirection::Growing
            }
            PulseDirection::Shrinking => {
                if bounds.width <= self.min_width {
                    return PulseDirection::Growing;
                }
                shrink(bounds);
                PulseDirection::Shrinking
            }
        }
    }
}

/// Expand by one pixel on every side
#[inline]
pub fn grow(bounds: &mut Rect) {
    bounds.inflate(1);
}

/// Contract by one pixel on every side
#[inline]
pub fn shrink(bounds: &mut Rect) {
    bounds.inflate(-1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_until_max_then_holds_one_step() {
        let pulse = Pulse::new(170, 174);
        let mut r = Rect::new(0, 0, 170, 170);
        let mut dir = PulseDirection::Growing;

        dir = pulse.step(&mut r, dir);
        assert_eq!((r.width, dir), (172, PulseDirection::Growing));
        dir = pulse.step(&mut r, dir);
        assert_eq!((r.width, dir), (174, PulseDirection::Growing));

        // On the bound: flip without moving
        dir = pulse.step(&mut r, dir);
        assert_eq!((r.width, dir), (174, PulseDirection::Shrinking));
        assert_eq!((r.x, r.y), (-2, -2));

        dir = pulse.step(&mut r, dir);
        assert_eq!((r.width, dir), (172, PulseDirection::Shrinking));
    }

    #[test]
    fn test_shrinks_until_min() {
        let pulse = Pulse::new(10, 100);
        let mut r = Rect::new(5, 5, 12, 12);
        let mut dir = PulseDirection::Shrinking;
        dir = pulse.step(&mut r, dir);
        assert_eq!(r, Rect::new(6, 6, 10, 10));
        dir = pulse.step(&mut r, dir);
        assert_eq!(dir, PulseDirection::Growing);
        assert_eq!(r, Rect::new(6, 6, 10, 10));
    }
}

//! Integer pixel rectangles
//!
//! Every shape in the animation (line, squares, circles, ball) is described by
//! its bounding rectangle in window pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, top-left origin, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-size rectangle at the given point
    pub const fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, 0, 0)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Integer center, rounded toward the top-left
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Exact center as floats
    #[inline]
    pub fn center_f32(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Grow (positive `amount`) or shrink (negative) around the center,
    /// moving each edge outward by `amount` pixels.
    #[inline]
    pub fn inflate(&mut self, amount: i32) {
        self.x -= amount;
        self.y -= amount;
        self.width += 2 * amount;
        self.height += 2 * amount;
    }

    /// Overlap test with open edges: rectangles that only touch do not
    /// intersect, and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (ax, ay) = (self.x as i64, self.y as i64);
        let (bx, by) = (other.x as i64, other.y as i64);
        ax < bx + other.width as i64
            && ay < by + other.height as i64
            && bx < ax + self.width as i64
            && by < ay + self.height as i64
    }
}

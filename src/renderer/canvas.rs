//! Immediate-mode drawing surface
//!
//! The scene painter only talks to this trait, so it can be pointed at the GPU
//! tessellator or at a recorder in tests.

use glam::Vec2;

use crate::palette::Rgb;
use crate::sim::Rect;

pub trait Canvas {
    /// Fill the ellipse inscribed in `bounds`
    fn fill_oval(&mut self, bounds: Rect, color: Rgb);

    /// Stroke the ellipse inscribed in `bounds`; the stroke is centered on the path
    fn stroke_oval(&mut self, bounds: Rect, stroke_width: f32, color: Rgb);

    fn fill_rect(&mut self, bounds: Rect, color: Rgb);

    /// Rotate everything drawn until the matching `pop_transform` by `degrees`
    /// (clockwise on screen) around `pivot`
    fn push_rotation(&mut self, degrees: f64, pivot: Vec2);

    fn pop_transform(&mut self);

    /// Draw a single line of text with its baseline at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb);
}

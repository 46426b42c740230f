//! Canvas implementation that turns draw calls into a triangle list
//!
//! Positions stay in window pixels; the pipeline maps them to clip space.

use glam::{Affine2, Vec2};

use super::canvas::Canvas;
use super::font;
use super::shapes;
use super::vertex::Vertex;
use crate::palette::Rgb;
use crate::sim::Rect;

/// Size of one font cell in pixels
pub const TEXT_SCALE: f32 = 1.2;

pub struct Tessellator {
    vertices: Vec<Vertex>,
    transforms: Vec<Affine2>,
    segments: u32,
    /// Emit linear-light colors (for sRGB render targets)
    linear_colors: bool,
}

impl Tessellator {
    pub fn new(segments: u32, linear_colors: bool) -> Self {
        Self {
            vertices: Vec::with_capacity(4096),
            transforms: Vec::new(),
            segments,
            linear_colors,
        }
    }

    /// Start a new frame, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
        if !self.transforms.is_empty() {
            log::warn!("{} unbalanced transform(s) dropped", self.transforms.len());
            self.transforms.clear();
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Map a color the way the target expects it
    pub fn color(&self, color: Rgb) -> [f32; 4] {
        if self.linear_colors {
            color.to_linear_array()
        } else {
            color.to_f32_array()
        }
    }

    fn current(&self) -> Affine2 {
        self.transforms.last().copied().unwrap_or(Affine2::IDENTITY)
    }

    fn extend_transformed(&mut self, vertices: impl IntoIterator<Item = Vertex>) {
        let transform = self.current();
        if transform == Affine2::IDENTITY {
            self.vertices.extend(vertices);
        } else {
            self.vertices.extend(vertices.into_iter().map(|v| Vertex {
                position: transform.transform_point2(v.pos()).to_array(),
                ..v
            }));
        }
    }

    fn radii(bounds: &Rect) -> Vec2 {
        Vec2::new(bounds.width as f32 / 2.0, bounds.height as f32 / 2.0)
    }
}

impl Canvas for Tessellator {
    fn fill_oval(&mut self, bounds: Rect, color: Rgb) {
        if bounds.is_empty() {
            return;
        }
        let color = self.color(color);
        let vertices = shapes::ellipse(
            bounds.center_f32(),
            Self::radii(&bounds),
            color,
            self.segments,
        );
        self.extend_transformed(vertices);
    }

    fn stroke_oval(&mut self, bounds: Rect, stroke_width: f32, color: Rgb) {
        if bounds.width < 0 || bounds.height < 0 {
            return;
        }
        let color = self.color(color);
        let radii = Self::radii(&bounds);
        let half = Vec2::splat(stroke_width / 2.0);
        let vertices = shapes::ellipse_ring(
            bounds.center_f32(),
            radii - half,
            radii + half,
            color,
            self.segments,
        );
        self.extend_transformed(vertices);
    }

    fn fill_rect(&mut self, bounds: Rect, color: Rgb) {
        if bounds.is_empty() {
            return;
        }
        let color = self.color(color);
        let min = Vec2::new(bounds.x as f32, bounds.y as f32);
        let max = Vec2::new(bounds.right() as f32, bounds.bottom() as f32);
        self.extend_transformed(shapes::quad(min, max, color));
    }

    fn push_rotation(&mut self, degrees: f64, pivot: Vec2) {
        let rotation = Affine2::from_translation(pivot)
            * Affine2::from_angle((degrees as f32).to_radians())
            * Affine2::from_translation(-pivot);
        let combined = self.current() * rotation;
        self.transforms.push(combined);
    }

    fn pop_transform(&mut self) {
        if self.transforms.pop().is_none() {
            log::warn!("pop_transform without matching push");
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) {
        let color = self.color(color);
        let top = y - font::GLYPH_HEIGHT as f32 * TEXT_SCALE;
        let mut quads = Vec::new();

        for (i, c) in text.chars().enumerate() {
            let origin_x = x + (i as u32 * font::ADVANCE) as f32 * TEXT_SCALE;
            for (col, row) in font::lit_cells(c) {
                let min = Vec2::new(
                    origin_x + col as f32 * TEXT_SCALE,
                    top + row as f32 * TEXT_SCALE,
                );
                quads.extend(shapes::quad(min, min + Vec2::splat(TEXT_SCALE), color));
            }
        }

        self.extend_transformed(quads);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::WHITE;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_rect_without_transform() {
        let mut t = Tessellator::new(16, false);
        t.fill_rect(Rect::new(10, 20, 30, 40), WHITE);
        let v = t.vertices();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[2].position, [40.0, 60.0]);
        assert_eq!(v[0].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_half_turn_about_pivot() {
        let mut t = Tessellator::new(16, false);
        t.push_rotation(180.0, Vec2::new(250.0, 235.0));
        t.fill_rect(Rect::new(200, 230, 100, 10), WHITE);
        t.pop_transform();
        t.fill_rect(Rect::new(0, 0, 1, 1), WHITE);

        let v = t.vertices();
        // Top-left corner lands on the bottom-right after half a turn
        assert!(approx(v[0].pos(), Vec2::new(300.0, 240.0)));
        assert!(approx(v[2].pos(), Vec2::new(200.0, 230.0)));
        // Popped: later shapes are untouched
        assert_eq!(v[6].position, [0.0, 0.0]);
    }

    #[test]
    fn test_quarter_turn_is_clockwise_on_screen() {
        let mut t = Tessellator::new(16, false);
        t.push_rotation(90.0, Vec2::ZERO);
        t.fill_rect(Rect::new(10, 0, 1, 1), WHITE);
        // +x rotates toward +y (down on screen)
        assert!(approx(t.vertices()[0].pos(), Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn test_empty_shapes_emit_nothing() {
        let mut t = Tessellator::new(16, false);
        t.fill_oval(Rect::point(250, 235), WHITE);
        t.fill_rect(Rect::new(0, 0, 0, 5), WHITE);
        assert!(t.vertices().is_empty());
    }

    #[test]
    fn test_stroke_straddles_path() {
        let mut t = Tessellator::new(4, false);
        t.stroke_oval(Rect::new(0, 0, 100, 100), 10.0, WHITE);
        let v = t.vertices();
        // Segment 0 at theta = 0: inner point then outer point
        assert!(approx(v[0].pos(), Vec2::new(95.0, 50.0)));
        assert!(approx(v[1].pos(), Vec2::new(105.0, 50.0)));
    }

    #[test]
    fn test_text_sits_on_baseline() {
        let mut t = Tessellator::new(16, false);
        t.draw_text("-", 15.0, 25.0, WHITE);
        // Five lit cells, one quad each
        assert_eq!(t.vertices().len(), 30);
        let top = 25.0 - 7.0 * TEXT_SCALE;
        assert!(approx(
            t.vertices()[0].pos(),
            Vec2::new(15.0, top + 3.0 * TEXT_SCALE)
        ));
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut t = Tessellator::new(16, true);
        t.push_rotation(45.0, Vec2::ZERO);
        t.fill_rect(Rect::new(0, 0, 2, 2), WHITE);
        t.clear();
        assert!(t.vertices().is_empty());
        t.fill_rect(Rect::new(1, 1, 1, 1), WHITE);
        assert_eq!(t.vertices()[0].position, [1.0, 1.0]);
    }
}

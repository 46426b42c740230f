//! Paints the animation state onto a canvas
//!
//! Read-only: nothing here mutates the state. Background color changes are
//! committed by the tick function; the pipeline clears with `state.background`.

use crate::consts::*;
use crate::palette::{self, Rgb};
use crate::sim::{AnimState, Rect};

use super::canvas::Canvas;

/// Overlay left margin and first baseline
const OVERLAY_X: f32 = 15.0;
const OVERLAY_FIRST_BASELINE: f32 = 25.0;
const OVERLAY_LINE_SPACING: f32 = 15.0;
/// Footer origin, measured from the bottom-right corner
const FOOTER_RIGHT_OFFSET: f32 = 115.0;
const FOOTER_BOTTOM_OFFSET: f32 = 45.0;

pub const FOOTER: &str = "By: Darian Benam";

/// Draw one frame, back to front
pub fn render(state: &AnimState, canvas: &mut impl Canvas) {
    if let Some(flash) = state.flash {
        canvas.fill_oval(flash, state.current_color());
    }

    canvas.fill_oval(state.ball, palette::BALL);

    canvas.fill_oval(state.circle, palette::CIRCLE_FILL);
    let (stroke, border_color) = border_style(state);
    canvas.stroke_oval(border_bounds(&state.circle, stroke), stroke as f32, border_color);

    canvas.push_rotation(state.angle, state.line.center_f32());
    canvas.fill_rect(state.line, palette::LINE);
    let (color_a, color_b) = square_colors(state);
    canvas.fill_rect(state.square_a, color_a);
    canvas.fill_rect(state.square_b, color_b);
    canvas.pop_transform();

    if state.overlay_visible {
        draw_overlay(state, canvas);
    }
}

/// Stroke width and color of the circle border
pub fn border_style(state: &AnimState) -> (i32, Rgb) {
    if state.circle_thick_border {
        (THICK_BORDER, palette::BALL)
    } else {
        (THIN_BORDER, palette::WHITE)
    }
}

/// Path rectangle for the border so the stroke hugs the filled circle
pub fn border_bounds(circle: &Rect, stroke: i32) -> Rect {
    Rect::new(
        circle.x - stroke / 2,
        circle.y - stroke / 2,
        circle.width + stroke - 1,
        circle.height + stroke - 1,
    )
}

pub fn square_colors(state: &AnimState) -> (Rgb, Rgb) {
    if state.colors_switched {
        (palette::SQUARE_B, palette::SQUARE_A)
    } else {
        (palette::SQUARE_A, palette::SQUARE_B)
    }
}

/// Overlay text lines, top to bottom
pub fn overlay_lines(state: &AnimState) -> [String; 4] {
    [
        format!("Time: {}", state.elapsed_ticks),
        format!("Paused: {}", state.paused),
        format!("Line Angle: {:.1}", state.angle),
        format!("Ball Direction: {}", state.ball_direction),
    ]
}

fn draw_overlay(state: &AnimState, canvas: &mut impl Canvas) {
    for (i, line) in overlay_lines(state).iter().enumerate() {
        let y = OVERLAY_FIRST_BASELINE + i as f32 * OVERLAY_LINE_SPACING;
        canvas.draw_text(line, OVERLAY_X, y, palette::OVERLAY_TEXT);
    }

    let size = WINDOW_SIZE as f32;
    canvas.draw_text(
        FOOTER,
        size - FOOTER_RIGHT_OFFSET,
        size - FOOTER_BOTTOM_OFFSET,
        palette::OVERLAY_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FillOval(Rect, Rgb),
        StrokeOval(Rect, f32, Rgb),
        FillRect(Rect, Rgb),
        PushRotation(f64, Vec2),
        Pop,
        Text(String, f32, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        fn fill_oval(&mut self, bounds: Rect, color: Rgb) {
            self.calls.push(Call::FillOval(bounds, color));
        }
        fn stroke_oval(&mut self, bounds: Rect, stroke_width: f32, color: Rgb) {
            self.calls.push(Call::StrokeOval(bounds, stroke_width, color));
        }
        fn fill_rect(&mut self, bounds: Rect, color: Rgb) {
            self.calls.push(Call::FillRect(bounds, color));
        }
        fn push_rotation(&mut self, degrees: f64, pivot: Vec2) {
            self.calls.push(Call::PushRotation(degrees, pivot));
        }
        fn pop_transform(&mut self) {
            self.calls.push(Call::Pop);
        }
        fn draw_text(&mut self, text: &str, x: f32, y: f32, _color: Rgb) {
            self.calls.push(Call::Text(text.to_string(), x, y));
        }
    }

    fn record(state: &AnimState) -> Vec<Call> {
        let mut recorder = Recorder::default();
        render(state, &mut recorder);
        recorder.calls
    }

    #[test]
    fn test_draw_order_without_flash_or_overlay() {
        let mut state = AnimState::new();
        state.overlay_visible = false;
        let calls = record(&state);

        assert_eq!(
            calls,
            vec![
                Call::FillOval(state.ball, palette::BALL),
                Call::FillOval(state.circle, palette::CIRCLE_FILL),
                Call::StrokeOval(Rect::new(165, 145, 169, 179), 10.0, palette::WHITE),
                Call::PushRotation(0.0, Vec2::new(250.0, 235.0)),
                Call::FillRect(state.line, palette::LINE),
                Call::FillRect(state.square_a, palette::SQUARE_A),
                Call::FillRect(state.square_b, palette::SQUARE_B),
                Call::Pop,
            ]
        );
    }

    #[test]
    fn test_flash_drawn_first_in_current_color() {
        let mut state = AnimState::new();
        state.flash = Some(Rect::new(240, 225, 20, 20));
        state.palette_index = 3;
        let calls = record(&state);
        assert_eq!(
            calls[0],
            Call::FillOval(Rect::new(240, 225, 20, 20), palette::PALETTE[3])
        );
    }

    #[test]
    fn test_thick_border_and_switched_colors() {
        let mut state = AnimState::new();
        state.overlay_visible = false;
        state.circle_thick_border = true;
        state.colors_switched = true;
        state.angle = 42.0;
        let calls = record(&state);

        assert_eq!(
            calls[2],
            Call::StrokeOval(Rect::new(158, 138, 184, 194), 25.0, palette::BALL)
        );
        assert_eq!(calls[3], Call::PushRotation(42.0, Vec2::new(250.0, 235.0)));
        assert_eq!(calls[5], Call::FillRect(state.square_a, palette::SQUARE_B));
        assert_eq!(calls[6], Call::FillRect(state.square_b, palette::SQUARE_A));
    }

    #[test]
    fn test_overlay_after_rotated_group() {
        let mut state = AnimState::new();
        state.elapsed_ticks = 1234;
        state.paused = true;
        state.angle = 90.0;
        let calls = record(&state);

        let pop = calls.iter().position(|c| *c == Call::Pop).expect("pop");
        let texts: Vec<_> = calls[pop + 1..].to_vec();
        assert_eq!(
            texts,
            vec![
                Call::Text("Time: 1234".into(), 15.0, 25.0),
                Call::Text("Paused: true".into(), 15.0, 40.0),
                Call::Text("Line Angle: 90.0".into(), 15.0, 55.0),
                Call::Text("Ball Direction: RIGHT".into(), 15.0, 70.0),
                Call::Text("By: Darian Benam".into(), 385.0, 455.0),
            ]
        );
    }

    #[test]
    fn test_footer_fits_inside_window() {
        use crate::renderer::Tessellator;

        let mut state = AnimState::new();
        state.ball = Rect::new(100, 100, 0, 0);
        let mut tess = Tessellator::new(16, false);
        render(&state, &mut tess);

        let size = WINDOW_SIZE as f32;
        for v in tess.vertices() {
            let [x, y] = v.position;
            assert!((0.0..=size).contains(&x), "x = {x}");
            assert!((0.0..=size).contains(&y), "y = {y}");
        }
    }
}

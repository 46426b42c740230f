//! Per-tick animation update
//!
//! One call advances every moving part by exactly one step. The order matches
//! the visual dependencies: the ball moves and is tested against the circle
//! before the circle breathes; squares move before the color and flip checks
//! look at their new positions.

use super::pulse;
use super::rect::Rect;
use super::state::{AnimEvent, AnimState, Direction, FlipPhase};
use crate::consts::*;
use crate::palette::{self, PALETTE};

/// Result of a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// State changed and the window should be repainted
    pub redraw: bool,
    /// Transitions that happened during this tick, in order
    pub events: Vec<AnimEvent>,
}

/// Advance the animation by one tick
pub fn tick(state: &mut AnimState) -> TickOutcome {
    state.elapsed_ticks += 1;

    if state.paused {
        return TickOutcome::default();
    }

    let mut events = Vec::new();

    move_ball(state, &mut events);
    breathe_circle(state);
    update_flash(state, &mut events);
    move_squares(state);
    check_color_switch(state, &mut events);
    sequence_flip(state, &mut events);

    TickOutcome {
        redraw: true,
        events,
    }
}

/// Step the ball one pixel and wrap it to the next side once it is fully off-screen
fn move_ball(state: &mut AnimState, events: &mut Vec<AnimEvent>) {
    let (dx, dy) = state.ball_direction.delta();
    state.ball.x += dx;
    state.ball.y += dy;

    if let Some((x, y)) = reentry_point(state.ball_direction, state.ball.x, state.ball.y) {
        state.ball.x = x;
        state.ball.y = y;
        state.ball_direction = state.ball_direction.next();
        events.push(AnimEvent::BallReentered(state.ball_direction));
    }

    state.circle_thick_border = state.ball.intersects(&state.circle);
}

/// Where the ball re-enters, if it has left the window in its direction of travel
fn reentry_point(direction: Direction, x: i32, y: i32) -> Option<(i32, i32)> {
    let centered = WINDOW_SIZE / 2 - BALL_SIZE / 2;
    match direction {
        Direction::Right if x >= WINDOW_SIZE + BALL_SIZE => Some((centered, -BALL_SIZE)),
        Direction::Down if y >= WINDOW_SIZE + BALL_SIZE => {
            Some((WINDOW_SIZE + BALL_SIZE / 2, WINDOW_SIZE / 2 - BALL_SIZE))
        }
        Direction::Left if x <= -BALL_SIZE => Some((centered, WINDOW_SIZE + BALL_SIZE / 2)),
        Direction::Up if y <= -BALL_SIZE => Some((-BALL_SIZE, WINDOW_SIZE / 2 - BALL_SIZE)),
        _ => None,
    }
}

fn breathe_circle(state: &mut AnimState) {
    state.circle_direction = state
        .circle_pulse
        .step(&mut state.circle, state.circle_direction);
}

/// Spawn, grow and retire the flash circle
fn update_flash(state: &mut AnimState, events: &mut Vec<AnimEvent>) {
    if state.elapsed_ticks % FLASH_INTERVAL_TICKS == 0 {
        let (cx, cy) = state.line.center();
        state.flash = Some(Rect::point(cx, cy));
        state.palette_index = palette::next_index(state.palette_index);
        state.pending_background = PALETTE[state.palette_index];
        events.push(AnimEvent::FlashSpawned {
            palette_index: state.palette_index,
        });
    }

    if let Some(flash) = state.flash.as_mut() {
        pulse::grow(flash);
        if flash.width >= WINDOW_SIZE + FLASH_OVERSHOOT {
            state.background = state.pending_background;
            state.flash = None;
            events.push(AnimEvent::BackgroundCommitted(state.background));
        }
    }
}

fn move_squares(state: &mut AnimState) {
    if !state.squares_moving() {
        return;
    }
    let step = if state.flipped { -1 } else { 1 };
    state.square_a.x += step;
    state.square_b.x -= step;
}

/// Swap square colors on the exact tick A sits one pixel left of B
fn check_color_switch(state: &mut AnimState, events: &mut Vec<AnimEvent>) {
    if state.square_a.x == state.square_b.x - 1 {
        state.colors_switched = !state.colors_switched;
        events.push(AnimEvent::ColorsSwitched(state.colors_switched));
    }
}

/// Halt the squares at either end of the line and rotate the group half a turn
fn sequence_flip(state: &mut AnimState, events: &mut Vec<AnimEvent>) {
    if state.flip_phase == FlipPhase::Moving {
        let next = if !state.flipped && state.square_a.x == state.track_end() {
            Some(FlipPhase::RotatingForward)
        } else if state.flipped && state.square_a.x == state.track_start() {
            Some(FlipPhase::RotatingBack)
        } else {
            None
        };
        if let Some(phase) = next {
            state.flip_phase = phase;
            events.push(AnimEvent::RotationStarted(phase));
        }
    }

    match state.flip_phase {
        FlipPhase::Moving => {}
        FlipPhase::RotatingForward => {
            state.angle += ROTATION_STEP;
            if state.angle >= HALF_TURN {
                state.angle = HALF_TURN;
                state.flipped = true;
                state.flip_phase = FlipPhase::Moving;
                events.push(AnimEvent::RotationFinished { flipped: true });
            }
        }
        FlipPhase::RotatingBack => {
            state.angle += ROTATION_STEP;
            if state.angle >= FULL_TURN {
                state.angle = 0.0;
                state.flipped = false;
                state.flip_phase = FlipPhase::Moving;
                events.push(AnimEvent::RotationFinished { flipped: false });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pulse::PulseDirection;

    fn run(state: &mut AnimState, ticks: u64) -> Vec<AnimEvent> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(tick(state).events);
        }
        events
    }

    #[test]
    fn test_first_tick() {
        let mut state = AnimState::new();
        let outcome = tick(&mut state);
        assert!(outcome.redraw);
        assert!(outcome.events.is_empty());
        assert_eq!(state.elapsed_ticks, 1);
        assert_eq!(state.ball.x, -24);
        assert_eq!(state.square_a.x, 201);
        assert_eq!(state.square_b.x, 274);
        assert_eq!(state.circle, Rect::new(169, 149, 162, 172));
        assert_eq!(state.angle, 0.0);
    }

    #[test]
    fn test_paused_tick_only_counts_time() {
        let mut state = AnimState::new();
        run(&mut state, 10);
        state.toggle_pause();
        let before = state.clone();

        let outcome = tick(&mut state);
        assert!(!outcome.redraw);
        assert!(outcome.events.is_empty());
        assert_eq!(state.elapsed_ticks, before.elapsed_ticks + 1);

        let mut expected = before;
        expected.elapsed_ticks += 1;
        assert_eq!(state, expected);
    }

    #[test]
    fn test_reentry_points() {
        assert_eq!(reentry_point(Direction::Right, 525, 225), Some((238, -25)));
        assert_eq!(reentry_point(Direction::Right, 524, 225), None);
        assert_eq!(reentry_point(Direction::Down, 238, 525), Some((512, 225)));
        assert_eq!(reentry_point(Direction::Left, -25, 225), Some((238, 512)));
        assert_eq!(reentry_point(Direction::Up, 238, -25), Some((-25, 225)));
        // Thresholds only apply to the direction of travel
        assert_eq!(reentry_point(Direction::Down, 600, 0), None);
        assert_eq!(reentry_point(Direction::Up, -100, 0), None);
    }

    #[test]
    fn test_ball_wraps_right_to_down() {
        let mut state = AnimState::new();
        state.ball.x = WINDOW_SIZE + BALL_SIZE - 1;
        let outcome = tick(&mut state);
        assert_eq!((state.ball.x, state.ball.y), (238, -25));
        assert_eq!(state.ball_direction, Direction::Down);
        assert_eq!(
            outcome.events,
            vec![AnimEvent::BallReentered(Direction::Down)]
        );
    }

    #[test]
    fn test_thick_border_is_level_triggered() {
        let mut state = AnimState::new();
        state.ball = Rect::new(state.circle.x - 30, 225, 25, 25);
        tick(&mut state);
        assert!(!state.circle_thick_border);

        // One step puts the ball's right edge two pixels past the circle's left edge
        state.ball.x = state.circle.x - 24;
        tick(&mut state);
        assert!(state.circle_thick_border);

        state.ball_direction = Direction::Left;
        state.ball.x = state.circle.x - 40;
        tick(&mut state);
        assert!(!state.circle_thick_border);
    }

    #[test]
    fn test_circle_breathes_between_bounds() {
        let mut state = AnimState::new();
        // 160 -> 250 takes 45 growth steps, then one holding tick
        run(&mut state, 45);
        assert_eq!(state.circle.width, 250);
        assert_eq!(state.circle_direction, PulseDirection::Growing);
        tick(&mut state);
        assert_eq!(state.circle.width, 250);
        assert_eq!(state.circle_direction, PulseDirection::Shrinking);
        // 250 -> 170 takes 40 steps
        run(&mut state, 40);
        assert_eq!(state.circle.width, 170);
        tick(&mut state);
        assert_eq!(state.circle_direction, PulseDirection::Growing);
    }

    #[test]
    fn test_circle_grows_into_band_before_breathing() {
        let mut state = AnimState::new();
        let min = state.line.width + CIRCLE_MIN_EXTRA;
        assert_eq!(state.circle.width, min - 10);
        run(&mut state, 4);
        assert_eq!(state.circle.width, min - 2);
        tick(&mut state);
        assert_eq!(state.circle.width, min);
        // Never drops back under the band once inside it
        for _ in 0..1000 {
            tick(&mut state);
            assert!(state.circle.width >= min);
        }
    }

    #[test]
    fn test_flash_spawns_and_retires() {
        let mut state = AnimState::new();
        let events = run(&mut state, FLASH_INTERVAL_TICKS);
        assert!(events.contains(&AnimEvent::FlashSpawned { palette_index: 1 }));
        assert_eq!(state.palette_index, 1);
        assert_eq!(state.flash, Some(Rect::new(249, 234, 2, 2)));
        assert_eq!(state.pending_background, PALETTE[1]);
        assert_eq!(state.background, palette::INITIAL_BACKGROUND);

        // Width grows by 2 per tick until it reaches 750: 374 more ticks
        run(&mut state, 373);
        assert_eq!(state.flash.map(|f| f.width), Some(748));
        let outcome = tick(&mut state);
        assert_eq!(state.flash, None);
        assert_eq!(state.background, PALETTE[1]);
        assert!(
            outcome
                .events
                .contains(&AnimEvent::BackgroundCommitted(PALETTE[1]))
        );
    }

    #[test]
    fn test_palette_wraps_after_last_entry() {
        let mut state = AnimState::new();
        state.palette_index = PALETTE.len() - 1;
        state.elapsed_ticks = FLASH_INTERVAL_TICKS - 1;
        tick(&mut state);
        assert_eq!(state.palette_index, 0);
        assert_eq!(state.pending_background, PALETTE[0]);
    }

    #[test]
    fn test_colors_switch_when_squares_cross() {
        let mut state = AnimState::new();
        // A at 200, B at 275; gap shrinks by 2 per tick and hits 1 after 37 ticks
        let events = run(&mut state, 36);
        assert!(!state.colors_switched);
        assert!(events.is_empty());
        tick(&mut state);
        assert_eq!((state.square_a.x, state.square_b.x), (237, 238));
        assert!(state.colors_switched);
        tick(&mut state);
        assert!(state.colors_switched);
    }

    #[test]
    fn test_forward_half_turn() {
        let mut state = AnimState::new();
        // 75 ticks bring A to the end of the line; rotation starts that same tick
        let events = run(&mut state, 75);
        assert_eq!(state.square_a.x, 275);
        assert_eq!(state.flip_phase, FlipPhase::RotatingForward);
        assert_eq!(state.angle, 1.0);
        assert!(events.contains(&AnimEvent::RotationStarted(FlipPhase::RotatingForward)));

        run(&mut state, 178);
        assert_eq!(state.angle, 179.0);
        assert_eq!(state.square_a.x, 275);
        assert!(!state.flipped);

        let outcome = tick(&mut state);
        assert_eq!(state.angle, 180.0);
        assert!(state.flipped);
        assert!(state.squares_moving());
        assert!(
            outcome
                .events
                .contains(&AnimEvent::RotationFinished { flipped: true })
        );

        // Mirrored motion
        tick(&mut state);
        assert_eq!(state.square_a.x, 274);
        assert_eq!(state.square_b.x, 201);
        assert_eq!(state.angle, 180.0);
    }

    #[test]
    fn test_back_half_turn_wraps_angle() {
        let mut state = AnimState::new();
        run(&mut state, 75 + 179);
        assert!(state.flipped);
        // 75 mirrored steps bring A back to the start of the line
        run(&mut state, 75);
        assert_eq!(state.square_a.x, 200);
        assert_eq!(state.flip_phase, FlipPhase::RotatingBack);
        assert_eq!(state.angle, 181.0);

        run(&mut state, 178);
        assert_eq!(state.angle, 359.0);
        tick(&mut state);
        assert_eq!(state.angle, 0.0);
        assert!(!state.flipped);
        assert!(state.squares_moving());

        tick(&mut state);
        assert_eq!(state.square_a.x, 201);
    }
}

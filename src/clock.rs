//! Fixed-period tick scheduling
//!
//! Converts wall-clock frame deltas into a whole number of animation ticks.
//! Behaves like a repeating UI timer: an initial delay before the first tick,
//! then one tick per period. Backlog beyond `max_ticks_per_frame` is coalesced
//! instead of replayed.

use std::time::Duration;

/// Longest frame delta accepted in one call (e.g. after the window was hidden)
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    delay_remaining: Duration,
    accumulator: Duration,
    max_ticks_per_frame: u32,
}

impl TickClock {
    pub fn new(period: Duration, start_delay: Duration, max_ticks_per_frame: u32) -> Self {
        Self {
            period,
            delay_remaining: start_delay,
            accumulator: Duration::ZERO,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }

    /// Still waiting for the initial delay to pass
    pub fn is_delayed(&self) -> bool {
        !self.delay_remaining.is_zero()
    }

    /// Feed elapsed wall time, returning how many ticks are now due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let mut elapsed = elapsed;

        if self.is_delayed() {
            if elapsed < self.delay_remaining {
                self.delay_remaining -= elapsed;
                return 0;
            }
            elapsed -= self.delay_remaining;
            self.delay_remaining = Duration::ZERO;
            // First tick fires as soon as the delay is over
            self.accumulator += self.period;
        }

        self.accumulator += elapsed.min(MAX_FRAME_DELTA);

        let mut ticks = 0;
        while self.accumulator >= self.period && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.period;
            ticks += 1;
        }

        if self.accumulator >= self.period {
            log::trace!("Coalescing {:?} of tick backlog", self.accumulator);
            let period = self.period.as_nanos();
            let rem = self.accumulator.as_nanos() % period;
            self.accumulator = Duration::from_nanos(rem as u64);
        }

        ticks
    }

    /// Time until the next tick becomes due
    pub fn time_until_next(&self) -> Duration {
        if self.is_delayed() {
            self.delay_remaining
        } else {
            self.period.saturating_sub(self.accumulator)
        }
    }
}

//! Fixed-step tick scheduler.
//!
//! Wall-clock time is fed in; whole simulation ticks come out. Lag is clamped
//! so a suspended terminal does not trigger a burst of catch-up ticks.

use super::constants::MAX_FRAME_LAG_MS;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedStep {
    tick_ms: f64,
    max_lag_ms: f64,
    accumulated_ms: f64,
}

impl FixedStep {
    /// `tick_ms` must be positive; `GameConfig::validate` guarantees that for
    /// the configured tick.
    pub fn new(tick_ms: f64) -> Self {
        Self {
            tick_ms,
            max_lag_ms: MAX_FRAME_LAG_MS as f64,
            accumulated_ms: 0.0,
        }
    }

    /// Add elapsed wall-clock time and return how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let elapsed_ms = (elapsed.as_secs_f64() * 1000.0).min(self.max_lag_ms);
        self.accumulated_ms += elapsed_ms;

        let mut due = 0;
        while self.accumulated_ms >= self.tick_ms {
            self.accumulated_ms -= self.tick_ms;
            due += 1;
        }
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        let remaining = (self.tick_ms - self.accumulated_ms).max(0.0);
        Duration::from_secs_f64(remaining / 1000.0)
    }
}

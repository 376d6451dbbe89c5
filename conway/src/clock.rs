// clock.rs - Pacing between generations

use std::time::{Duration, Instant};

/// Source of the inter-generation delay.
pub trait Clock {
    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);

    /// Time since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time; `sleep` really blocks the thread.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Simulated time: `sleep` returns at once and advances the clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    pub sleeps: usize,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps += 1;
        self.advance(duration);
    }

    fn elapsed(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_counts_sleeps() {
        let mut clock = ManualClock::new();
        clock.sleep(Duration::from_millis(100));
        clock.sleep(Duration::from_millis(50));
        assert_eq!(clock.sleeps, 2);
        assert_eq!(clock.elapsed(), Duration::from_millis(150));
    }

    #[test]
    fn system_clock_moves_forward() {
        let mut clock = SystemClock::new();
        clock.sleep(Duration::from_millis(1));
        assert!(clock.elapsed() >= Duration::from_millis(1));
    }
}

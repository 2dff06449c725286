//! Recurring auto-advance timer for the carousel.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Armed,
    Released,
}

/// Fixed-interval timer advanced by frame deltas.
///
/// A zero interval never fires. Once released the timer stays inert;
/// releasing again is a no-op.
#[derive(Debug, Clone)]
pub struct AutoPlayTimer {
    interval: Duration,
    elapsed: Duration,
    state: TimerState,
}

impl AutoPlayTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            state: TimerState::Armed,
        }
    }

    /// Advance the timer and return how many times it fired.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        if self.state == TimerState::Released || self.interval.is_zero() {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let interval = self.interval.as_nanos();
        let elapsed = self.elapsed.as_nanos();
        // Remainder is below `interval`, which came from a Duration.
        self.elapsed = duration_from_nanos(elapsed % interval);
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }

    /// Time left until the next fire, or `None` if the timer can't fire.
    #[must_use]
    pub fn until_next(&self) -> Option<Duration> {
        if self.state == TimerState::Released || self.interval.is_zero() {
            return None;
        }
        Some(self.interval.saturating_sub(self.elapsed))
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn release(&mut self) {
        self.state = TimerState::Released;
        self.elapsed = Duration::ZERO;
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.state == TimerState::Released
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

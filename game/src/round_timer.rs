use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A countdown pinned to an absolute deadline on the game clock.
///
/// The clock keeps advancing on every screen, so time spent paused still counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    started_at: Duration,
    limit: Duration,
    fired: bool,
}

impl RoundTimer {
    pub fn new(started_at: Duration, limit: Duration) -> Self {
        Self {
            started_at,
            limit,
            fired: false,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn deadline(&self) -> Duration {
        self.started_at.saturating_add(self.limit)
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.limit.saturating_sub(self.elapsed(now))
    }

    pub fn is_up(&self, now: Duration) -> bool {
        now >= self.deadline()
    }

    /// Share of the limit still left, in `0.0..=1.0`.
    pub fn fraction_remaining(&self, now: Duration) -> f32 {
        if self.limit.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f32() / self.limit.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// True exactly once: on the first call at or past the deadline.
    pub fn fire_if_up(&mut self, now: Duration) -> bool {
        if self.fired || !self.is_up(now) {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn remaining_counts_down_from_the_start_time() {
        let t = RoundTimer::new(secs(10), secs(60));
        assert_eq!(t.remaining(secs(10)), secs(60));
        assert_eq!(t.remaining(secs(40)), secs(30));
        assert_eq!(t.elapsed(secs(40)), secs(30));
        assert!((t.fraction_remaining(secs(40)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn timer_reports_up_at_or_past_limit() {
        let t = RoundTimer::new(Duration::ZERO, secs(20));
        assert!(!t.is_up(secs(19)));
        assert!(t.is_up(secs(20)));
        assert_eq!(t.remaining(secs(25)), Duration::ZERO);
        assert_eq!(t.fraction_remaining(secs(25)), 0.0);
    }

    #[test]
    fn fires_exactly_once() {
        let mut t = RoundTimer::new(Duration::ZERO, secs(5));
        assert!(!t.fire_if_up(secs(4)));
        assert!(t.fire_if_up(secs(5)));
        assert!(!t.fire_if_up(secs(6)));
        assert!(t.has_fired());
    }
}

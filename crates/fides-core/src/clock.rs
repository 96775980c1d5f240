//! Clock implementations.
//!
//! `SystemClock` is the production time source. `ManualClock` is a
//! deterministic clock for tests and demos: it only moves when told to, and
//! only forward, preserving the ledger's monotonic-clock contract.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::traits::Clock;

/// The production clock: reads the system wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A hand-advanced clock for deterministic tests and demos.
///
/// Starts at a fixed instant and moves only via `advance()`. Attempts to move
/// backwards are clamped to the current time, so the clock is always
/// monotonically non-decreasing.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `delta`. Negative deltas are ignored.
    pub fn advance(&self, delta: Duration) {
        if delta < Duration::zero() {
            return;
        }
        let mut now = self.now.lock().expect("manual clock lock poisoned");
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("manual clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn manual_clock_is_frozen_until_advanced() {
        let clock = ManualClock::new(start());
        assert_eq!(clock.now(), start());
        assert_eq!(clock.now(), start());
    }

    #[test]
    fn manual_clock_advances_forward() {
        let clock = ManualClock::new(start());
        clock.advance(Duration::days(30));
        assert_eq!(clock.now(), start() + Duration::days(30));
    }

    #[test]
    fn manual_clock_ignores_backward_moves() {
        let clock = ManualClock::new(start());
        clock.advance(Duration::days(-5));
        assert_eq!(clock.now(), start(), "clock must never move backwards");
    }
}

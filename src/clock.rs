//! Time source for the board.
//!
//! The store itself never reads the time; callers pass `now` in. The board actor gets its
//! `now` from a [`Clock`] injected as actor context, so tests can swap in a [`ManualClock`]
//! and move time forward by hand.

use chrono::{DateTime, Duration, Local, Utc};
use std::sync::{Arc, Mutex, PoisonError};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Whole minutes from `start` to `now`, truncated. Negative if `now` is earlier.
pub fn minutes_between(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_minutes()
}

/// Formats an instant as local "HH:MM" for display.
pub fn format_clock_time(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance(Duration::minutes(30));
        assert_eq!(clock.now(), start + Duration::minutes(30));
    }

    #[test]
    fn test_minutes_between_truncates_and_crosses_midnight() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 23, 50, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 0, 15, 59).unwrap();
        assert_eq!(minutes_between(start, now), 25);
        assert_eq!(minutes_between(now, start), -25);
    }

    #[test]
    fn test_format_clock_time_is_hours_and_minutes() {
        let label = format_clock_time(Utc::now());
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}

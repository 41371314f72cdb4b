// src/infrastructure/clock.rs

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
#[cfg(test)]
use mockall::automock;

use crate::domain::Timestamp;

/// Source of the per-request timestamp
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Nanoseconds since the Unix epoch. Never smaller than a previous reading.
    fn now(&self) -> Timestamp;
}

/// Wall clock, clamped so readings never go backwards
/// even if the system time is adjusted.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let wall = Utc::now()
            .timestamp_nanos_opt()
            .map(|nanos| nanos.max(0) as u64)
            .unwrap_or(u64::MAX);

        let previous = self.last.fetch_max(wall, Ordering::SeqCst);
        previous.max(wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let mut last = clock.now();

        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_system_clock_ignores_backwards_wall_time() {
        let clock = SystemClock::new();
        let future = clock.now() + 60_000_000_000;
        clock.last.store(future, Ordering::SeqCst);

        assert_eq!(clock.now(), future);
    }
}

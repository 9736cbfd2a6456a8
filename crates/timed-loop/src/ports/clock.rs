//! Clock port - monotonic time source for deadlines.
//!
//! # Implementations
//! - **SystemClock**: `std::time::Instant::now()` (default)
//! - **TokioClock**: tokio's clock, which follows `tokio::time::pause()`
//! - **ManualClock** (`impls`): advanced by hand, for deterministic tests

use std::time::Instant;

/// Clock provides the current instant.
///
/// Only differences between instants matter, so any monotonic source works.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock backed by `tokio::time::Instant`.
///
/// Under a paused runtime this only moves when tokio auto-advances or when
/// `tokio::time::advance` is called.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_clock_follows_paused_time() {
        let clock = TokioClock;
        let before = clock.now();
        tokio::time::advance(Duration::from_secs(5)).await;
        let after = clock.now();
        assert_eq!(after.duration_since(before), Duration::from_secs(5));
    }
}

//! Time source for the rate limiter.
//!
//! Production code uses [`SystemClock`]. Tests drive time explicitly with
//! `ManualClock`, available in test builds or with the `test-utils` feature.

use std::fmt::Debug;
use std::time::Instant;

/// Monotonic time source.
pub trait Clock: Send + Sync + Debug {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test-utils"))]
mod manual {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use parking_lot::Mutex;

    use super::Clock;

    /// Clock whose time only moves when told to.
    ///
    /// Clones share the same underlying instant, so a test can hand one
    /// clone to the limiter and advance time through another.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        current: Arc<Mutex<Instant>>,
    }

    impl ManualClock {
        /// Create a clock frozen at `start`.
        #[must_use]
        pub fn new(start: Instant) -> Self {
            Self {
                current: Arc::new(Mutex::new(start)),
            }
        }

        /// Move the clock forward.
        pub fn advance(&self, duration: Duration) {
            *self.current.lock() += duration;
        }

        /// Set the clock to a specific instant.
        pub fn set(&self, instant: Instant) {
            *self.current.lock() = instant;
        }
    }

    impl Default for ManualClock {
        fn default() -> Self {
            Self::new(Instant::now())
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.current.lock()
        }
    }
}

//! Wall-clock access
//!
//! Every source of non-determinism in the seed pipeline is a clock read.
//! The [`Clock`] trait abstracts it so a generator can run against the real
//! system time or a frozen instant.

use serde::{Deserialize, Serialize};
use web_time::{Duration, SystemTime, UNIX_EPOCH};

use crate::constants::seed::NANOS_PER_TICK;

/// Trait for reading the current time
///
/// Implementations only need to report the time elapsed since the Unix
/// epoch; the derived readings used by the seed pipeline are provided.
pub trait Clock {
    /// Returns the time elapsed since the Unix epoch
    fn since_epoch(&self) -> Duration;

    /// Returns the current time in whole seconds
    fn seconds(&self) -> u64 {
        self.since_epoch().as_secs()
    }

    /// Returns the current time in 100 ns ticks (seconds × 10^7, truncated)
    fn ticks(&self) -> u128 {
        self.since_epoch().as_nanos() / NANOS_PER_TICK
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn since_epoch(&self) -> Duration {
        (**self).since_epoch()
    }
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    /// Reads the system time, reporting zero if it is set before the epoch
    fn since_epoch(&self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// A clock frozen at a single instant
///
/// Under a fixed clock seeds, scores and generated numbers are fully
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedClock {
    since_epoch: Duration,
}

impl FixedClock {
    /// Creates a clock frozen at the given offset from the epoch
    pub fn new(since_epoch: Duration) -> Self {
        Self { since_epoch }
    }

    /// Creates a clock frozen at `secs` seconds plus `nanos` nanoseconds
    pub fn from_parts(secs: u64, nanos: u32) -> Self {
        Self::new(Duration::new(secs, nanos))
    }
}

impl Clock for FixedClock {
    fn since_epoch(&self) -> Duration {
        self.since_epoch
    }
}

//! Random jitter added on top of backoff waits
//!
//! Jitter spreads retries from many callers apart so they do not hammer a recovering
//! dependency in lock-step.
//!
//! - `None`: deterministic waits, useful for tests or tightly controlled workflows.
//! - `Uniform`: an extra amount drawn uniformly from `[0, max)`.
//!
//! RNG: `apply` uses `rand`'s thread-local RNG; deterministic RNGs can be injected via
//! `apply_with_rng`. Nanosecond conversions saturate to `u64::MAX` to avoid panics on very
//! large durations.
//!
//! ```rust
//! use std::time::Duration;
//! use strategic_retry::Jitter;
//!
//! let jitter = Jitter::uniform(Duration::from_millis(50));
//! assert!(jitter.apply() < Duration::from_millis(50));
//! assert_eq!(Jitter::uniform(Duration::ZERO), Jitter::None);
//! ```

use rand::{rng, Rng};
use std::time::Duration;

/// Jitter strategy for randomizing retry waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Jitter {
    /// No jitter
    #[default]
    None,
    /// Uniform extra wait in `[0, max)`
    Uniform { max: Duration },
}

impl Jitter {
    /// Uniform jitter below `max`. A zero span collapses to `Jitter::None`.
    pub fn uniform(max: Duration) -> Self {
        if max.is_zero() {
            Jitter::None
        } else {
            Jitter::Uniform { max }
        }
    }

    /// Upper (exclusive) bound of the extra wait.
    pub fn span(&self) -> Duration {
        match self {
            Jitter::None => Duration::ZERO,
            Jitter::Uniform { max } => *max,
        }
    }

    /// Draw a jitter amount from the thread-local RNG.
    pub fn apply(&self) -> Duration {
        let mut rng = rng();
        self.apply_with_rng(&mut rng)
    }

    /// Draw a jitter amount with a caller-supplied RNG (for testing).
    pub fn apply_with_rng<R: Rng>(&self, rng: &mut R) -> Duration {
        match self {
            Jitter::None => Duration::ZERO,
            Jitter::Uniform { max } => {
                let nanos = Self::as_nanos_saturated(*max);
                if nanos == 0 {
                    return Duration::ZERO;
                }
                Duration::from_nanos(rng.random_range(0..nanos))
            }
        }
    }

    fn as_nanos_saturated(duration: Duration) -> u64 {
        duration.as_nanos().try_into().unwrap_or(u64::MAX)
    }
}

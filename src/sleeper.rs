//! Abstraction for pausing between attempts
//!
//! Pauses block the calling thread. Swapping the sleeper enables fast, deterministic tests
//! without real time delays.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Blocks the calling thread for a duration.
pub trait Sleeper: std::fmt::Debug {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Test sleeper that doesn't actually sleep
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    fn sleep(&self, _duration: Duration) {}
}

/// Test sleeper that records every requested pause without sleeping.
///
/// Clones share the same log, so a clone can be handed to a decorator while the original
/// is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct TrackingSleeper {
    calls: Arc<Mutex<Vec<Duration>>>,
}

impl TrackingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Duration> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Sum of all recorded pauses.
    pub fn total(&self) -> Duration {
        self.calls().iter().sum()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Sleeper for TrackingSleeper {
    fn sleep(&self, duration: Duration) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(duration);
    }
}

impl<Z: Sleeper + ?Sized> Sleeper for &Z {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

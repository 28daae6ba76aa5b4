//! Fixed pause between attempts.
//!
//! When the inner strategy asks for a retry, the calling thread is blocked for `delay`
//! before the answer is returned, so consecutive attempts are at least `delay` apart. A
//! refusal from the inner strategy returns immediately without pausing.

use crate::sleeper::{Sleeper, ThreadSleeper};
use crate::strategy::RetryStrategy;
use std::time::Duration;

/// Decorator that pauses for a fixed delay before each granted retry.
#[derive(Debug, Clone)]
pub struct WithWait<S, Z = ThreadSleeper> {
    inner: S,
    delay: Duration,
    sleeper: Z,
}

impl<S> WithWait<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay, sleeper: ThreadSleeper }
    }
}

impl<S, Z> WithWait<S, Z> {
    /// Provide a custom sleeper implementation.
    pub fn with_sleeper<Z2: Sleeper>(self, sleeper: Z2) -> WithWait<S, Z2> {
        WithWait { inner: self.inner, delay: self.delay, sleeper }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<E, S, Z> RetryStrategy<E> for WithWait<S, Z>
where
    S: RetryStrategy<E>,
    Z: Sleeper,
{
    fn should_retry(&mut self, error: &E) -> bool {
        if !self.inner.should_retry(error) {
            return false;
        }
        tracing::debug!(
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            "waiting before retry"
        );
        self.sleeper.sleep(self.delay);
        true
    }
}

/// Wrap `inner` so every granted retry is preceded by a `delay` pause.
pub fn with_wait<S>(inner: S, delay: Duration) -> WithWait<S> {
    WithWait::new(inner, delay)
}

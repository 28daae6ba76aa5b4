//! Exponential backoff with jitter.
//!
//! Each granted retry pauses for the current wait plus a random jitter amount, then grows the
//! wait for next time. Growth is quadratic in the retry counter, which is seeded at `1` and
//! bumped before every pause:
//!
//! ```text
//! retry 1: minimum_wait            (then wait = minimum_wait * 2^2)
//! retry 2: minimum_wait * 4        (then wait = minimum_wait * 3^2)
//! retry 3: minimum_wait * 9        ...
//! ```
//!
//! The wait is clamped to `maximum_wait`, so a pause never exceeds `maximum_wait + jitter`.
//! A refusal from the inner strategy returns immediately and leaves the state untouched.
//!
//! Overflow behavior: computations that would overflow saturate instead of panicking.
//!
//! Example
//! ```rust
//! use std::time::Duration;
//! use strategic_retry::{limit, retry, with_exponential_backoff};
//!
//! let strategy = with_exponential_backoff(
//!     limit(3),
//!     Duration::from_millis(1),
//!     Duration::from_millis(5),
//!     Duration::from_millis(1),
//! );
//! let result: Result<(), &str> = retry(|| Err("unavailable"), strategy);
//! assert_eq!(result, Err("unavailable"));
//! ```

use crate::error::ConfigError;
use crate::jitter::Jitter;
use crate::sleeper::{Sleeper, ThreadSleeper};
use crate::strategy::RetryStrategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Upper bound for configured waits (1 day).
pub const MAX_BACKOFF: Duration = Duration::from_secs(24 * 60 * 60);

const DEFAULT_MINIMUM_WAIT: Duration = Duration::from_millis(100);
const DEFAULT_MAXIMUM_WAIT: Duration = Duration::from_secs(10);
const INITIAL_RETRIES: u32 = 1;

/// Wait bounds and jitter span for [`WithExponentialBackoff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBackoffConfig"))]
pub struct BackoffConfig {
    minimum_wait: Duration,
    maximum_wait: Duration,
    jitter: Duration,
}

/// Unvalidated wire form; deserialization goes through [`BackoffConfig::validate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBackoffConfig {
    minimum_wait: Duration,
    maximum_wait: Duration,
    #[serde(default)]
    jitter: Duration,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBackoffConfig> for BackoffConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBackoffConfig) -> Result<Self, Self::Error> {
        BackoffConfig::new(raw.minimum_wait, raw.maximum_wait, raw.jitter)
    }
}

impl BackoffConfig {
    /// Validated configuration. `maximum_wait` must be at least `minimum_wait` and no larger
    /// than [`MAX_BACKOFF`].
    pub fn new(
        minimum_wait: Duration,
        maximum_wait: Duration,
        jitter: Duration,
    ) -> Result<Self, ConfigError> {
        Self { minimum_wait, maximum_wait, jitter }.validate()
    }

    /// Re-check a configuration's invariants.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.maximum_wait < self.minimum_wait {
            return Err(ConfigError::MaxLessThanMin {
                min: self.minimum_wait,
                max: self.maximum_wait,
            });
        }
        if self.maximum_wait > MAX_BACKOFF {
            return Err(ConfigError::MaxExceedsCap { max: self.maximum_wait, cap: MAX_BACKOFF });
        }
        Ok(self)
    }

    pub fn minimum_wait(&self) -> Duration {
        self.minimum_wait
    }

    pub fn maximum_wait(&self) -> Duration {
        self.maximum_wait
    }

    pub fn jitter(&self) -> Duration {
        self.jitter
    }

    /// Largest base wait ever used: `maximum_wait`, saturated at [`MAX_BACKOFF`].
    pub fn ceiling(&self) -> Duration {
        self.maximum_wait.min(MAX_BACKOFF)
    }

    /// Wait used before the retry that follows `retries` bumps of the counter:
    /// `minimum_wait * retries^2`, clamped to [`ceiling`](Self::ceiling).
    pub fn wait_for(&self, retries: u32) -> Duration {
        let factor = u128::from(retries).saturating_mul(u128::from(retries));
        let nanos = self.minimum_wait.as_nanos().saturating_mul(factor);
        let capped = nanos.min(self.ceiling().as_nanos());
        Duration::from_nanos(u64::try_from(capped).unwrap_or(u64::MAX))
    }
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            minimum_wait: DEFAULT_MINIMUM_WAIT,
            maximum_wait: DEFAULT_MAXIMUM_WAIT,
            jitter: Duration::ZERO,
        }
    }
}

/// Decorator that pauses for a growing, jittered wait before each granted retry.
#[derive(Debug, Clone)]
pub struct WithExponentialBackoff<S, Z = ThreadSleeper, R = StdRng> {
    inner: S,
    config: BackoffConfig,
    jitter: Jitter,
    retries: u32,
    current_wait: Duration,
    sleeper: Z,
    rng: R,
}

impl<S> WithExponentialBackoff<S> {
    pub fn from_config(inner: S, config: BackoffConfig) -> Self {
        Self {
            inner,
            jitter: Jitter::uniform(config.jitter),
            retries: INITIAL_RETRIES,
            current_wait: config.minimum_wait.min(config.ceiling()),
            config,
            sleeper: ThreadSleeper,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl<S, Z, R> WithExponentialBackoff<S, Z, R> {
    /// Provide a custom sleeper implementation.
    pub fn with_sleeper<Z2: Sleeper>(self, sleeper: Z2) -> WithExponentialBackoff<S, Z2, R> {
        WithExponentialBackoff {
            inner: self.inner,
            config: self.config,
            jitter: self.jitter,
            retries: self.retries,
            current_wait: self.current_wait,
            sleeper,
            rng: self.rng,
        }
    }

    /// Provide the RNG jitter is drawn from (for deterministic tests).
    pub fn with_rng<R2: Rng>(self, rng: R2) -> WithExponentialBackoff<S, Z, R2> {
        WithExponentialBackoff {
            inner: self.inner,
            config: self.config,
            jitter: self.jitter,
            retries: self.retries,
            current_wait: self.current_wait,
            sleeper: self.sleeper,
            rng,
        }
    }

    pub fn config(&self) -> &BackoffConfig {
        &self.config
    }

    /// Base wait (before jitter) of the next granted retry.
    pub fn current_wait(&self) -> Duration {
        self.current_wait
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<E, S, Z, R> RetryStrategy<E> for WithExponentialBackoff<S, Z, R>
where
    S: RetryStrategy<E>,
    Z: Sleeper,
    R: Rng,
{
    fn should_retry(&mut self, error: &E) -> bool {
        if !self.inner.should_retry(error) {
            return false;
        }
        self.retries = self.retries.saturating_add(1);
        let pause = self.current_wait.saturating_add(self.jitter.apply_with_rng(&mut self.rng));
        tracing::debug!(
            retries = self.retries,
            delay_ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX),
            "backing off before retry"
        );
        self.sleeper.sleep(pause);
        self.current_wait = self.config.wait_for(self.retries);
        true
    }
}

/// Wrap `inner` with quadratic backoff between `minimum_wait` and `maximum_wait`, plus up to
/// `jitter` of random extra wait.
///
/// Unlike [`BackoffConfig::new`] this never fails: if `maximum_wait < minimum_wait`, every
/// pause is simply clamped to `maximum_wait`, and a `maximum_wait` above [`MAX_BACKOFF`]
/// saturates to it.
pub fn with_exponential_backoff<S>(
    inner: S,
    minimum_wait: Duration,
    maximum_wait: Duration,
    jitter: Duration,
) -> WithExponentialBackoff<S> {
    WithExponentialBackoff::from_config(inner, BackoffConfig { minimum_wait, maximum_wait, jitter })
}

//! Convenient re-exports for common strategy types.
pub use crate::{
    backoff::{with_exponential_backoff, BackoffConfig, WithExponentialBackoff},
    error::ConfigError,
    jitter::Jitter,
    limit::{limit, with_limit, WithLimit},
    retry::retry,
    sleeper::{InstantSleeper, Sleeper, ThreadSleeper, TrackingSleeper},
    strategy::{always, Always, RetryStrategy},
    wait::{with_wait, WithWait},
};

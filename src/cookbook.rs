//! Ready-to-use strategy recipes ("cookbook").
//!
//! Each function builds a fresh chain from the decorators in this crate. Chains carry
//! per-run state, so call the recipe again for every retry run instead of reusing one.

use std::time::Duration;

use crate::backoff::{BackoffConfig, WithExponentialBackoff};
use crate::limit::{with_limit, WithLimit};
use crate::strategy::Always;
use crate::wait::{with_wait, WithWait};

/// Retry every failure, pausing `delay` between attempts, for at most `limit` attempts.
pub fn fixed_interval(limit: usize, delay: Duration) -> WithWait<WithLimit<Always>> {
    with_wait(with_limit(Always, limit), delay)
}

/// Retry every failure with quadratic backoff, for at most `limit` attempts.
///
/// The limit sits inside the backoff so the final, refused failure does not pause.
pub fn bounded_backoff(
    limit: usize,
    config: BackoffConfig,
) -> WithExponentialBackoff<WithLimit<Always>> {
    WithExponentialBackoff::from_config(with_limit(Always, limit), config)
}

/// Retry only what `classify` accepts, for at most `limit` attempts.
///
/// ```rust
/// use strategic_retry::{cookbook, retry};
///
/// #[derive(Debug, PartialEq)]
/// struct Status(u16);
///
/// let server_errors = |s: &Status| s.0 >= 500;
/// let mut calls = 0;
/// let result: Result<(), Status> = retry(
///     || {
///         calls += 1;
///         Err(Status(503))
///     },
///     cookbook::classified(server_errors, 5),
/// );
/// assert_eq!(result, Err(Status(503)));
/// assert_eq!(calls, 5);
/// ```
pub fn classified<F>(classify: F, limit: usize) -> WithLimit<F> {
    with_limit(classify, limit)
}

//! Bounding the number of failures a strategy tolerates.
//!
//! Semantics:
//! - The counter is bumped on every evaluation, before the inner strategy is consulted.
//! - An inner "don't retry" always wins; the limit never forces a retry.
//! - Once the counter reaches `limit`, every later evaluation answers `false`. There is no reset.
//! - `limit == 0` behaves like `limit == 1`: the first failure is final.
//!
//! With [`retry`](crate::retry), an operation that keeps failing is therefore invoked exactly
//! `limit` times (at least once).

use crate::strategy::{Always, RetryStrategy};

/// Decorator that caps how many failures are retried.
#[derive(Debug, Clone)]
pub struct WithLimit<S> {
    inner: S,
    attempts: usize,
    limit: usize,
}

impl<S> WithLimit<S> {
    pub fn new(inner: S, limit: usize) -> Self {
        Self { inner, attempts: 0, limit }
    }

    /// Failures seen so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// True once no further retry will be granted.
    pub fn is_exhausted(&self) -> bool {
        self.attempts >= self.limit
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<E, S> RetryStrategy<E> for WithLimit<S>
where
    S: RetryStrategy<E>,
{
    fn should_retry(&mut self, error: &E) -> bool {
        self.attempts = self.attempts.saturating_add(1);
        if !self.inner.should_retry(error) {
            return false;
        }
        if self.attempts < self.limit {
            return true;
        }
        tracing::warn!(attempts = self.attempts, limit = self.limit, "retry limit reached");
        false
    }
}

/// Wrap `inner` so that at most `limit` failures are tolerated.
pub fn with_limit<S>(inner: S, limit: usize) -> WithLimit<S> {
    WithLimit::new(inner, limit)
}

/// Retry unconditionally until `limit` failures have been seen.
pub fn limit(limit: usize) -> WithLimit<Always> {
    WithLimit::new(Always, limit)
}

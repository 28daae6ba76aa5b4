//! The retry loop.
//!
//! Semantics:
//! - The operation is invoked; `Ok` is returned immediately.
//! - On `Err`, the strategy is consulted. `false` hands that exact error back to the caller;
//!   `true` invokes the operation again.
//! - The loop adds no cap, pause, or jitter of its own. All policy lives in the strategy.
//!
//! Invariants:
//! - The returned error is always the last one the operation produced, unmodified.
//! - The strategy is consulted exactly once per failure and never after a success.
//!
//! Everything runs on the calling thread; there is no cancellation. To stop early from
//! outside, have the operation return an error the strategy refuses to retry.

use crate::strategy::RetryStrategy;

/// Invoke `operation` until it succeeds or `strategy` declines to retry a failure.
///
/// With [`Always`](crate::Always) and no limiting decorator this never returns for an
/// operation that keeps failing.
///
/// ```rust
/// use strategic_retry::{limit, retry};
///
/// let mut calls = 0;
/// let result: Result<u32, &str> = retry(
///     || {
///         calls += 1;
///         if calls < 3 { Err("not yet") } else { Ok(calls) }
///     },
///     limit(5),
/// );
/// assert_eq!(result, Ok(3));
/// ```
pub fn retry<T, E, Op, S>(mut operation: Op, mut strategy: S) -> Result<T, E>
where
    Op: FnMut() -> Result<T, E>,
    S: RetryStrategy<E>,
{
    let mut attempt: usize = 0;
    loop {
        attempt = attempt.saturating_add(1);
        match operation() {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "operation succeeded after retries");
                }
                return Ok(value);
            }
            Err(error) => {
                if !strategy.should_retry(&error) {
                    tracing::debug!(attempt, "giving up; returning last failure");
                    return Err(error);
                }
                tracing::debug!(attempt, "operation failed; retrying");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limit::{limit, with_limit};
    use crate::strategy::{always, Always};
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestError(&'static str);

    #[test]
    fn success_first_attempt_skips_strategy() {
        let consulted = Cell::new(0);
        let result = retry(
            || Ok::<_, TestError>(42),
            |_e: &TestError| {
                consulted.set(consulted.get() + 1);
                true
            },
        );
        assert_eq!(result, Ok(42));
        assert_eq!(consulted.get(), 0);
    }

    #[test]
    fn returns_last_error_verbatim() {
        let mut calls = 0;
        let result: Result<(), _> = retry(
            || {
                calls += 1;
                Err(if calls < 3 { TestError("transient") } else { TestError("fatal") })
            },
            |e: &TestError| e.0 == "transient",
        );
        assert_eq!(result, Err(TestError("fatal")));
        assert_eq!(calls, 3);
    }

    #[test]
    fn strategy_consulted_once_per_failure() {
        let consulted = Cell::new(0);
        let mut calls = 0;
        let result = retry(
            || {
                calls += 1;
                if calls <= 4 {
                    Err(TestError("flaky"))
                } else {
                    Ok(calls)
                }
            },
            |_e: &TestError| {
                consulted.set(consulted.get() + 1);
                true
            },
        );
        assert_eq!(result, Ok(5));
        assert_eq!(consulted.get(), 4);
    }

    #[test]
    fn limit_bounds_attempts() {
        let mut calls = 0;
        let result: Result<(), _> = retry(
            || {
                calls += 1;
                Err(TestError("down"))
            },
            limit(5),
        );
        assert_eq!(result, Err(TestError("down")));
        assert_eq!(calls, 5);
    }

    #[test]
    fn zero_limit_runs_once() {
        let mut calls = 0;
        let result: Result<(), _> = retry(
            || {
                calls += 1;
                Err(TestError("down"))
            },
            limit(0),
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn always_runs_until_success() {
        let mut calls = 0;
        let result = retry(
            || {
                calls += 1;
                if calls == 5 {
                    Ok(())
                } else {
                    Err(TestError("again"))
                }
            },
            Always,
        );
        assert_eq!(result, Ok(()));
        assert_eq!(calls, 5);
    }

    #[test]
    fn always_function_works_as_strategy() {
        let mut calls = 0;
        let result = retry(
            || {
                calls += 1;
                if calls < 3 {
                    Err(TestError("again"))
                } else {
                    Ok(calls)
                }
            },
            always::<TestError>,
        );
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn limit_respects_inner_veto() {
        let mut calls = 0;
        let mut seen = 0;
        let veto_on_second = |_e: &TestError| {
            seen += 1;
            seen < 2
        };
        let result: Result<(), _> = retry(
            || {
                calls += 1;
                Err(TestError("down"))
            },
            with_limit(veto_on_second, 100),
        );
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }
}

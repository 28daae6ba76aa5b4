//! The retry strategy abstraction and its base case.
//!
//! A strategy looks at the latest failure and answers one question: try again? Strategies
//! are stateful (`&mut self`) so decorators can count attempts or grow their waits, and
//! every decorator owns the strategy it wraps. A chain is therefore a plain tree of owned
//! values with no sharing; building one per retry run is the intended lifecycle.
//!
//! Any `FnMut(&E) -> bool` closure is a strategy, which is how callers plug in their own
//! error classification:
//!
//! ```rust
//! use strategic_retry::{retry, with_limit};
//!
//! #[derive(Debug, PartialEq)]
//! enum FetchError { Unavailable, Forbidden }
//!
//! let classify = |e: &FetchError| matches!(e, FetchError::Unavailable);
//! let result: Result<(), _> = retry(|| Err(FetchError::Forbidden), with_limit(classify, 5));
//! assert_eq!(result, Err(FetchError::Forbidden));
//! ```

/// Decides, given the latest failure, whether the operation should be attempted again.
pub trait RetryStrategy<E> {
    /// Returns `true` to request another attempt. May block (see the wait decorators).
    fn should_retry(&mut self, error: &E) -> bool;
}

impl<E, F> RetryStrategy<E> for F
where
    F: FnMut(&E) -> bool,
{
    fn should_retry(&mut self, error: &E) -> bool {
        self(error)
    }
}

/// Retries every failure, forever.
///
/// On its own this never gives up: an operation that never succeeds keeps the retry loop
/// spinning. Wrap it in [`with_limit`](crate::with_limit) (or use [`limit`](crate::limit))
/// to bound it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Always;

impl<E> RetryStrategy<E> for Always {
    fn should_retry(&mut self, _error: &E) -> bool {
        true
    }
}

/// Function form of [`Always`], usable wherever a plain predicate is expected.
pub fn always<E>(_error: &E) -> bool {
    true
}

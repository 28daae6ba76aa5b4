#![forbid(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::all))]

//! # Strategic Retry
//!
//! Composable, blocking retry strategies: keep calling an operation until it succeeds or a
//! strategy decides to give up.
//!
//! ## Features
//!
//! - **One retry loop** ([`retry`]) with no built-in policy of its own
//! - **Strategies as values**: any `FnMut(&E) -> bool` classifier, or [`Always`]
//! - **Decorators** that wrap a strategy and add one concern each:
//!   [`with_limit`], [`with_wait`], [`with_exponential_backoff`]
//! - **Injectable sleepers and RNGs** for fast, deterministic tests
//!
//! Errors are never wrapped: whatever the operation last failed with is what the caller gets.
//!
//! ## Quick Start
//!
//! ```rust
//! use strategic_retry::{retry, with_exponential_backoff, with_limit};
//! use std::time::Duration;
//!
//! #[derive(Debug, PartialEq)]
//! enum FetchError { ServerError, Forbidden }
//!
//! let retry_server_errors = |e: &FetchError| *e == FetchError::ServerError;
//! let strategy = with_exponential_backoff(
//!     with_limit(retry_server_errors, 5),
//!     Duration::from_millis(1),
//!     Duration::from_millis(10),
//!     Duration::from_millis(1),
//! );
//!
//! let mut calls = 0;
//! let result: Result<&str, FetchError> = retry(
//!     || {
//!         calls += 1;
//!         if calls < 3 { Err(FetchError::ServerError) } else { Ok("body") }
//!     },
//!     strategy,
//! );
//! assert_eq!(result, Ok("body"));
//! ```
//!
//! Decorators consult the strategy they wrap first. Put limits innermost so the refused
//! final failure does not also pay for a pause.
//!
//! Strategies keep per-run state (attempt counters, current waits). Build a fresh chain for
//! each call to [`retry`].

pub mod backoff;
pub mod cookbook;
pub mod error;
pub mod jitter;
pub mod limit;
pub mod prelude;
pub mod retry;
pub mod sleeper;
pub mod strategy;
pub mod wait;

// Re-exports
pub use backoff::{with_exponential_backoff, BackoffConfig, WithExponentialBackoff, MAX_BACKOFF};
pub use error::ConfigError;
pub use jitter::Jitter;
pub use limit::{limit, with_limit, WithLimit};
pub use retry::retry;
pub use sleeper::{InstantSleeper, Sleeper, ThreadSleeper, TrackingSleeper};
pub use strategy::{always, Always, RetryStrategy};
pub use wait::{with_wait, WithWait};

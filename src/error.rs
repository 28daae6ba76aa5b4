//! Configuration errors
//!
//! The retry loop itself never produces errors of its own: whatever the operation fails
//! with is handed back to the caller untouched. The only errors defined here come from
//! validating backoff configuration.
use std::time::Duration;

/// Errors returned while validating a [`BackoffConfig`](crate::BackoffConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The maximum wait is below the minimum wait.
    #[error("maximum wait ({max:?}) must be >= minimum wait ({min:?})")]
    MaxLessThanMin { min: Duration, max: Duration },
    /// The maximum wait is above [`MAX_BACKOFF`](crate::backoff::MAX_BACKOFF).
    #[error("maximum wait ({max:?}) exceeds the {cap:?} backoff cap")]
    MaxExceedsCap { max: Duration, cap: Duration },
}

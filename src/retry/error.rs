//! Error types for backoff configuration.

use std::time::Duration;

/// Error returned by [`Backoff::validate`](crate::retry::Backoff::validate).
///
/// # Examples
///
/// ```rust
/// use seqflow::retry::{Backoff, BackoffError};
/// use std::time::Duration;
///
/// let backoff = Backoff::exponential(Duration::from_millis(100));
/// assert_eq!(backoff.validate(), Err(BackoffError::Unbounded));
///
/// let backoff = backoff.with_max_retries(5);
/// assert!(backoff.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BackoffError {
    /// The growth factor is below 1 or not a number.
    InvalidFactor(f64),
    /// The jitter factor is outside `[0, 1]`.
    InvalidJitter(f64),
    /// The delay ceiling is below the initial delay.
    MaxBelowInitial {
        /// The configured initial delay.
        initial: Duration,
        /// The configured ceiling.
        max: Duration,
    },
    /// Neither a retry count nor an elapsed-time budget is set, so the
    /// schedule never ends.
    Unbounded,
}

impl BackoffError {
    /// Returns true if the schedule would never end.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl std::fmt::Display for BackoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFactor(factor) => {
                write!(f, "backoff factor must be at least 1, got {}", factor)
            }
            Self::InvalidJitter(jitter) => {
                write!(f, "jitter factor must be within [0, 1], got {}", jitter)
            }
            Self::MaxBelowInitial { initial, max } => write!(
                f,
                "max delay {:?} is below the initial delay {:?}",
                max, initial
            ),
            Self::Unbounded => write!(
                f,
                "backoff must have at least one bound (max_retries or max_elapsed)"
            ),
        }
    }
}

impl std::error::Error for BackoffError {}

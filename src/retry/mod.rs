//! Retry and backoff as sequences.
//!
//! This module turns a delay schedule (any [`Seq`](crate::Seq) of
//! [`Duration`](std::time::Duration)s) into a retry plan: a pair sequence
//! of `(attempt, delay)` that blocks for each delay before yielding the
//! attempt. The caller drives it with an ordinary loop and stops it by
//! returning `false` once an attempt succeeds:
//!
//! - **Plans**: [`Retry`] (immediate first attempt) and [`RetryAfterDelay`]
//! - **Cancellation**: [`CancelToken`] ends a plan mid-wait; [`NeverCancel`] never does
//! - **Configuration**: [`Backoff`] describes the usual exponential schedule as data
//!
//! # Quick Start
//!
//! ```rust
//! use seqflow::prelude::*;
//! use seqflow::retry::{Backoff, CancelToken};
//! use std::time::Duration;
//!
//! let backoff = Backoff::exponential(Duration::from_millis(1))
//!     .with_jitter(0.1)
//!     .with_max_retries(5);
//! backoff.validate().unwrap();
//!
//! let token = CancelToken::new();
//! let mut result = Err("not tried");
//! backoff.retry(&token).produce(|(attempt, _delay)| {
//!     result = if attempt < 2 { Err("transient") } else { Ok(attempt) };
//!     result.is_err()
//! });
//!
//! assert_eq!(result, Ok(2));
//! ```
//!
//! Failure is observed by the caller: when the plan ends while the last
//! attempt still failed, retries are exhausted (or the plan was cancelled).

mod cancel;
mod error;
mod plan;
mod policy;

pub use cancel::{CancelToken, Cancellation, NeverCancel};
pub use error::BackoffError;
pub use plan::{retry, retry_after_delay, Retry, RetryAfterDelay};
pub use policy::Backoff;

#[cfg(test)]
mod tests;

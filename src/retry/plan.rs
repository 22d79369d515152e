//! Retry plans - attempt/delay sequences driven by a delay schedule.
//!
//! A plan is a pair sequence of `(attempt, delay)`. Pulling the next pair
//! blocks for `delay`, racing the cancellation signal; when the signal
//! fires first, the plan ends without yielding that attempt.
//!
//! Two plans are provided:
//!
//! - [`RetryAfterDelay`]: `delay, attempt 1, delay, attempt 2, ...`
//! - [`Retry`]: `attempt 0, delay, attempt 1, delay, attempt 2, ...`:
//!   the first attempt is immediate and carries a zero delay.
//!
//! # Example
//!
//! ```rust
//! use seqflow::prelude::*;
//! use std::time::Duration;
//!
//! let schedule = exponential(Duration::from_millis(1), Duration::from_millis(4), 2.0).trim(4);
//!
//! let mut attempts = Vec::new();
//! retry(schedule, NeverCancel).produce(|(attempt, delay)| {
//!     attempts.push((attempt, delay));
//!     // pretend the third attempt succeeds
//!     attempt < 2
//! });
//!
//! assert_eq!(
//!     attempts,
//!     vec![
//!         (0, Duration::ZERO),
//!         (1, Duration::from_millis(1)),
//!         (2, Duration::from_millis(2)),
//!     ]
//! );
//! ```

use std::time::Duration;

use crate::retry::cancel::Cancellation;
use crate::seq::trait_def::Seq;

/// Waits before every attempt, numbering attempts from 1.
///
/// Created by [`retry_after_delay`] or [`RetryAfterDelay::from_optional`].
#[derive(Debug, Clone)]
pub struct RetryAfterDelay<S, C> {
    delays: Option<S>,
    cancel: C,
}

impl<S, C> RetryAfterDelay<S, C> {
    /// Create a plan over `delays`.
    pub fn new(delays: S, cancel: C) -> Self {
        Self::from_optional(Some(delays), cancel)
    }

    /// Create a plan over a schedule that may be absent. Without a
    /// schedule the plan yields nothing.
    pub fn from_optional(delays: Option<S>, cancel: C) -> Self {
        Self { delays, cancel }
    }
}

impl<S, C> Seq for RetryAfterDelay<S, C>
where
    S: Seq<Item = Duration>,
    C: Cancellation,
{
    type Item = (u32, Duration);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((u32, Duration)) -> bool,
    {
        let Some(delays) = &self.delays else {
            return;
        };
        let mut attempt: u32 = 1;
        delays.produce(|delay| {
            if self.cancel.is_cancelled() || self.cancel.wait_cancelled(delay) {
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, ?delay, "retry plan cancelled");
                return false;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt, ?delay, "retry attempt");
            if !receiver((attempt, delay)) {
                return false;
            }
            attempt = attempt.saturating_add(1);
            true
        })
    }
}

/// Yields an immediate attempt `(0, 0)`, then behaves like
/// [`RetryAfterDelay`].
///
/// Created by [`retry`] or [`Retry::from_optional`].
#[derive(Debug, Clone)]
pub struct Retry<S, C> {
    after_delay: RetryAfterDelay<S, C>,
}

impl<S, C> Retry<S, C> {
    /// Create a plan over `delays`.
    pub fn new(delays: S, cancel: C) -> Self {
        Self::from_optional(Some(delays), cancel)
    }

    /// Create a plan over a schedule that may be absent. Without a
    /// schedule only the immediate attempt is yielded.
    pub fn from_optional(delays: Option<S>, cancel: C) -> Self {
        Self {
            after_delay: RetryAfterDelay::from_optional(delays, cancel),
        }
    }
}

impl<S, C> Seq for Retry<S, C>
where
    S: Seq<Item = Duration>,
    C: Cancellation,
{
    type Item = (u32, Duration);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((u32, Duration)) -> bool,
    {
        if !receiver((0, Duration::ZERO)) {
            return;
        }
        self.after_delay.produce(receiver)
    }
}

/// Retry plan with an immediate first attempt.
pub fn retry<S, C>(delays: S, cancel: C) -> Retry<S, C>
where
    S: Seq<Item = Duration>,
    C: Cancellation,
{
    Retry::new(delays, cancel)
}

/// Retry plan that waits before every attempt.
pub fn retry_after_delay<S, C>(delays: S, cancel: C) -> RetryAfterDelay<S, C>
where
    S: Seq<Item = Duration>,
    C: Cancellation,
{
    RetryAfterDelay::new(delays, cancel)
}

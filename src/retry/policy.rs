//! Backoff configuration.

use std::time::Duration;

use crate::retry::cancel::Cancellation;
use crate::retry::error::BackoffError;
use crate::retry::plan::{Retry, RetryAfterDelay};
use crate::seq::boxed::BoxedSeq;
use crate::seq::ext::SeqExt;
use crate::seq::sources::exponential;

const DEFAULT_FACTOR: f64 = 2.0;
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// A backoff configuration describing a delay schedule.
///
/// A `Backoff` is pure data: it describes the schedule but runs nothing.
/// [`Backoff::schedule`] turns it into the sequence
///
/// ```text
/// exponential(initial, max_delay, factor)
///     .jitter(jitter)
///     .trim(max_retries)          // if set
///     .max_elapsed(max_elapsed)   // if set
/// ```
///
/// and [`Backoff::retry`] wraps that schedule in a retry plan.
///
/// # Bounds
///
/// A schedule without `max_retries` or `max_elapsed` never ends, which is
/// almost always a bug; [`Backoff::validate`] reports it.
///
/// # Examples
///
/// ```rust
/// use seqflow::prelude::*;
/// use seqflow::retry::Backoff;
/// use std::time::Duration;
///
/// let backoff = Backoff::exponential(Duration::from_millis(100))
///     .with_max_delay(Duration::from_millis(500))
///     .with_max_retries(5);
///
/// assert_eq!(
///     backoff.schedule().to_vec(),
///     vec![
///         Duration::from_millis(100),
///         Duration::from_millis(200),
///         Duration::from_millis(400),
///         Duration::from_millis(500),
///         Duration::from_millis(500),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Backoff {
    initial: Duration,
    max_delay: Duration,
    factor: f64,
    jitter: f64,
    max_retries: Option<u32>,
    max_elapsed: Option<Duration>,
}

impl Backoff {
    /// Delays that grow by a factor (2 by default) from `initial` up to the
    /// maximum delay (30s by default).
    pub fn exponential(initial: Duration) -> Self {
        Self {
            initial,
            max_delay: DEFAULT_MAX_DELAY.max(initial),
            factor: DEFAULT_FACTOR,
            jitter: 0.0,
            max_retries: None,
            max_elapsed: None,
        }
    }

    /// The same delay before every attempt.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    /// use seqflow::retry::Backoff;
    /// use std::time::Duration;
    ///
    /// let backoff = Backoff::constant(Duration::from_millis(50)).with_max_retries(3);
    /// assert_eq!(backoff.schedule().to_vec(), vec![Duration::from_millis(50); 3]);
    /// ```
    pub fn constant(delay: Duration) -> Self {
        Self {
            initial: delay,
            max_delay: delay,
            factor: 1.0,
            jitter: 0.0,
            max_retries: None,
            max_elapsed: None,
        }
    }

    /// Set the growth factor.
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Set the delay ceiling.
    ///
    /// Growth stops at this value. Jitter is applied after the cap, so a
    /// jittered delay may exceed it by up to the jitter factor.
    pub fn with_max_delay(mut self, max: Duration) -> Self {
        self.max_delay = max;
        self
    }

    /// Randomize every delay by up to `±factor` of itself.
    ///
    /// The factor is clamped to `[0, 1]`; `0` disables jitter and `NaN`
    /// is treated as `0`.
    pub fn with_jitter(mut self, factor: f64) -> Self {
        self.jitter = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the maximum number of delayed retries.
    ///
    /// With [`Backoff::retry`] this does not count the immediate first
    /// attempt: `with_max_retries(3)` means up to 4 attempts in total.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }

    /// Stop the schedule once more than `budget` has passed since the
    /// traversal started.
    pub fn with_max_elapsed(mut self, budget: Duration) -> Self {
        self.max_elapsed = Some(budget);
        self
    }

    /// Get the initial delay.
    pub fn initial(&self) -> Duration {
        self.initial
    }

    /// Get the delay ceiling.
    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Get the growth factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Get the jitter factor.
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Get the maximum number of retries.
    pub fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }

    /// Get the elapsed-time budget.
    pub fn max_elapsed(&self) -> Option<Duration> {
        self.max_elapsed
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), BackoffError> {
        if self.factor.is_nan() || self.factor < 1.0 {
            return Err(BackoffError::InvalidFactor(self.factor));
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(BackoffError::InvalidJitter(self.jitter));
        }
        if self.max_delay < self.initial {
            return Err(BackoffError::MaxBelowInitial {
                initial: self.initial,
                max: self.max_delay,
            });
        }
        if self.max_retries.is_none() && self.max_elapsed.is_none() {
            return Err(BackoffError::Unbounded);
        }
        Ok(())
    }

    /// The delay schedule this configuration describes.
    pub fn schedule(&self) -> BoxedSeq<'static, Duration> {
        let delays = exponential(self.initial, self.max_delay, self.factor).jitter(self.jitter);
        let retries = self.max_retries.map(|n| n as usize);
        match (retries, self.max_elapsed) {
            (Some(n), Some(budget)) => delays.trim(n).max_elapsed(budget).boxed(),
            (Some(n), None) => delays.trim(n).boxed(),
            (None, Some(budget)) => delays.max_elapsed(budget).boxed(),
            (None, None) => delays.boxed(),
        }
    }

    /// A retry plan over this schedule with an immediate first attempt.
    pub fn retry<C: Cancellation>(&self, cancel: C) -> Retry<BoxedSeq<'static, Duration>, C> {
        Retry::new(self.schedule(), cancel)
    }

    /// A retry plan over this schedule that waits before every attempt.
    pub fn retry_after_delay<C: Cancellation>(
        &self,
        cancel: C,
    ) -> RetryAfterDelay<BoxedSeq<'static, Duration>, C> {
        RetryAfterDelay::new(self.schedule(), cancel)
    }
}

#[cfg(test)]
mod policy_tests {
    use super::*;
    use crate::seq::ext::SeqExt;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_exponential_schedule() {
        let backoff = Backoff::exponential(ms(100)).with_max_retries(4);
        assert_eq!(
            backoff.schedule().to_vec(),
            vec![ms(100), ms(200), ms(400), ms(800)]
        );
    }

    #[test]
    fn test_custom_factor() {
        let backoff = Backoff::exponential(ms(10))
            .with_factor(3.0)
            .with_max_retries(3);
        assert_eq!(backoff.schedule().to_vec(), vec![ms(10), ms(30), ms(90)]);
    }

    #[test]
    fn test_max_delay_cap() {
        let backoff = Backoff::exponential(ms(100))
            .with_max_delay(ms(300))
            .with_max_retries(4);
        assert_eq!(
            backoff.schedule().to_vec(),
            vec![ms(100), ms(200), ms(300), ms(300)]
        );
    }

    #[test]
    fn test_default_max_delay_is_never_below_initial() {
        let backoff = Backoff::exponential(Duration::from_secs(60));
        assert_eq!(backoff.max_delay(), Duration::from_secs(60));
    }

    #[test]
    fn test_jitter_is_clamped() {
        assert_eq!(Backoff::constant(ms(1)).with_jitter(4.0).jitter(), 1.0);
        assert_eq!(Backoff::constant(ms(1)).with_jitter(-1.0).jitter(), 0.0);
    }

    #[test]
    fn test_nan_jitter_keeps_delays() {
        let backoff = Backoff::constant(ms(100))
            .with_jitter(f64::NAN)
            .with_max_retries(3);
        assert_eq!(backoff.jitter(), 0.0);
        assert_eq!(backoff.validate(), Ok(()));
        assert_eq!(backoff.schedule().to_vec(), vec![ms(100); 3]);
    }

    #[test]
    fn test_jittered_schedule_stays_in_bounds() {
        let backoff = Backoff::constant(ms(100))
            .with_jitter(0.2)
            .with_max_retries(100);
        let delays = backoff.schedule().to_vec();
        assert_eq!(delays.len(), 100);
        assert!(delays.iter().all(|d| *d >= ms(80) && *d <= ms(120)));
    }

    #[test]
    fn test_max_elapsed_only_schedule_ends() {
        let backoff = Backoff::constant(ms(1)).with_max_elapsed(Duration::ZERO);
        // Nothing waits between values here, so the zero budget may let a
        // handful through before the clock moves; it must still end.
        assert!(backoff.schedule().trim(1_000_000).count() < 1_000_000);
    }

    #[test]
    fn test_validate_ok() {
        let backoff = Backoff::exponential(ms(100)).with_max_retries(3);
        assert_eq!(backoff.validate(), Ok(()));
    }

    #[test]
    fn test_validate_unbounded() {
        let backoff = Backoff::exponential(ms(100));
        assert_eq!(backoff.validate(), Err(BackoffError::Unbounded));
    }

    #[test]
    fn test_validate_bad_factor() {
        let backoff = Backoff::exponential(ms(100))
            .with_factor(0.5)
            .with_max_retries(3);
        assert_eq!(backoff.validate(), Err(BackoffError::InvalidFactor(0.5)));

        let backoff = backoff.with_factor(f64::NAN);
        assert!(matches!(
            backoff.validate(),
            Err(BackoffError::InvalidFactor(_))
        ));
    }

    #[test]
    fn test_validate_bad_jitter() {
        let mut backoff = Backoff::constant(ms(10)).with_max_retries(3);
        backoff.jitter = 1.5;
        assert_eq!(backoff.validate(), Err(BackoffError::InvalidJitter(1.5)));

        backoff.jitter = -0.1;
        assert_eq!(backoff.validate(), Err(BackoffError::InvalidJitter(-0.1)));

        backoff.jitter = f64::NAN;
        assert!(matches!(
            backoff.validate(),
            Err(BackoffError::InvalidJitter(j)) if j.is_nan()
        ));
    }

    #[test]
    fn test_validate_max_below_initial() {
        let backoff = Backoff::exponential(ms(100))
            .with_max_delay(ms(50))
            .with_max_retries(3);
        assert_eq!(
            backoff.validate(),
            Err(BackoffError::MaxBelowInitial {
                initial: ms(100),
                max: ms(50),
            })
        );
    }

    #[test]
    fn test_getters() {
        let backoff = Backoff::exponential(ms(100))
            .with_factor(1.5)
            .with_max_delay(Duration::from_secs(5))
            .with_jitter(0.25)
            .with_max_retries(3)
            .with_max_elapsed(Duration::from_secs(60));

        assert_eq!(backoff.initial(), ms(100));
        assert_eq!(backoff.factor(), 1.5);
        assert_eq!(backoff.max_delay(), Duration::from_secs(5));
        assert_eq!(backoff.jitter(), 0.25);
        assert_eq!(backoff.max_retries(), Some(3));
        assert_eq!(backoff.max_elapsed(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_backoff_is_clone() {
        let backoff = Backoff::exponential(ms(100)).with_max_retries(3);
        assert_eq!(backoff.clone(), backoff);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_backoff_serde_roundtrip() {
        let backoff = Backoff::exponential(ms(250))
            .with_jitter(0.1)
            .with_max_retries(7);
        let json = serde_json::to_string(&backoff).unwrap();
        let parsed: Backoff = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, backoff);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialized_jitter_is_validated() {
        let json = r#"{
            "initial": {"secs": 0, "nanos": 100000000},
            "max_delay": {"secs": 1, "nanos": 0},
            "factor": 2.0,
            "jitter": 2.0,
            "max_retries": 3,
            "max_elapsed": null
        }"#;
        let parsed: Backoff = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.jitter(), 2.0);
        assert_eq!(parsed.validate(), Err(BackoffError::InvalidJitter(2.0)));
    }
}

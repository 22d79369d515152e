//! Cancellation signals for retry plans.
//!
//! A retry plan waits between attempts. That wait is the only place in the
//! crate that blocks, and it is always a race: the plan sleeps until the
//! delay runs out *or* the signal fires, whichever comes first.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// A cooperative cancellation signal.
///
/// Implementations must make `wait_cancelled` return as soon as the signal
/// fires, not after the full timeout.
pub trait Cancellation {
    /// Whether the signal has fired.
    fn is_cancelled(&self) -> bool;

    /// Block for at most `timeout`, returning early if the signal fires.
    ///
    /// Returns `true` if the signal fired (before or during the wait),
    /// `false` if the full timeout elapsed.
    fn wait_cancelled(&self, timeout: Duration) -> bool;
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }

    fn wait_cancelled(&self, timeout: Duration) -> bool {
        (**self).wait_cancelled(timeout)
    }
}

/// A shareable, one-shot cancellation signal.
///
/// Clones share the same signal. Once cancelled, a token stays cancelled.
///
/// # Example
///
/// ```rust
/// use seqflow::retry::{CancelToken, Cancellation};
/// use std::time::{Duration, Instant};
///
/// let token = CancelToken::new();
/// let remote = token.clone();
/// std::thread::spawn(move || {
///     std::thread::sleep(Duration::from_millis(20));
///     remote.cancel();
/// });
///
/// let start = Instant::now();
/// assert!(token.wait_cancelled(Duration::from_secs(10)));
/// assert!(start.elapsed() < Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    signal: Arc<Signal>,
}

#[derive(Debug, Default)]
struct Signal {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl CancelToken {
    /// Create a token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal and wake every waiter.
    pub fn cancel(&self) {
        let mut cancelled = self
            .signal
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled = true;
        self.signal.wake.notify_all();
    }
}

impl Cancellation for CancelToken {
    fn is_cancelled(&self) -> bool {
        *self
            .signal
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn wait_cancelled(&self, timeout: Duration) -> bool {
        let cancelled = self
            .signal
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (cancelled, _) = self
            .signal
            .wake
            .wait_timeout_while(cancelled, timeout, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled
    }
}

/// A signal that never fires. Waiting on it is a plain sleep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn wait_cancelled(&self, timeout: Duration) -> bool {
        thread::sleep(timeout);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_wait_times_out_when_not_cancelled() {
        let token = CancelToken::new();
        let start = Instant::now();
        assert!(!token.wait_cancelled(Duration::from_millis(30)));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_wait_returns_immediately_when_already_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        let start = Instant::now();
        assert!(token.wait_cancelled(Duration::from_secs(30)));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_wakes_a_waiter() {
        let token = CancelToken::new();
        let remote = token.clone();
        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            remote.cancel();
        });

        let start = Instant::now();
        assert!(token.wait_cancelled(Duration::from_secs(30)));
        assert!(start.elapsed() < Duration::from_secs(5));
        canceller.join().unwrap();
    }

    #[test]
    fn test_never_cancel_sleeps_full_timeout() {
        let start = Instant::now();
        assert!(!NeverCancel.wait_cancelled(Duration::from_millis(20)));
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn test_borrowed_token_is_a_cancellation() {
        fn fired<C: Cancellation>(c: C) -> bool {
            c.is_cancelled()
        }

        let token = CancelToken::new();
        token.cancel();
        assert!(fired(&token));
    }
}

//! Integration tests for retry plans.

use super::*;
use crate::seq::ext::SeqExt;
use crate::seq::sources::{empty, exponential, of, repeat};
use crate::seq::trait_def::Seq;
use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_retry_emits_immediate_attempt_then_delays() {
    let start = Instant::now();
    let attempts = retry(repeat(ms(100)).trim(10), NeverCancel).to_vec();

    assert_eq!(attempts.len(), 11);
    assert_eq!(attempts[0], (0, Duration::ZERO));
    for (i, (attempt, delay)) in attempts.iter().enumerate().skip(1) {
        assert_eq!(*attempt as usize, i);
        assert_eq!(*delay, ms(100));
    }
    assert!(start.elapsed() > Duration::from_secs(1));
}

#[test]
fn test_retry_after_delay_numbers_from_one() {
    let attempts = retry_after_delay(of(vec![ms(1), ms(2), ms(3)]), NeverCancel).to_vec();
    assert_eq!(attempts, vec![(1, ms(1)), (2, ms(2)), (3, ms(3))]);
}

#[test]
fn test_retry_stops_when_receiver_stops() {
    let schedule = exponential(ms(1), Duration::from_secs(1), 2.0).trim(5);
    let mut seen = Vec::new();
    retry(schedule, NeverCancel).produce(|pair| {
        seen.push(pair);
        pair.0 != 3
    });
    assert_eq!(seen, vec![(0, ms(0)), (1, ms(1)), (2, ms(2)), (3, ms(4))]);
}

#[test]
fn test_receiver_stop_pulls_no_further_delay() {
    let pulled = Cell::new(0);
    let schedule = repeat(ms(1)).inspect(|_| pulled.set(pulled.get() + 1));
    retry_after_delay(&schedule, NeverCancel).produce(|(attempt, _)| attempt < 3);
    assert_eq!(pulled.get(), 3);
}

#[test]
fn test_break_at_immediate_attempt_never_waits() {
    let start = Instant::now();
    let mut seen = Vec::new();
    retry(repeat(Duration::from_secs(60)), NeverCancel).produce(|pair| {
        seen.push(pair);
        false
    });
    assert_eq!(seen, vec![(0, Duration::ZERO)]);
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_missing_schedule_yields_nothing() {
    let plan = RetryAfterDelay::<crate::seq::sources::Repeat<Duration>, _>::from_optional(
        None,
        NeverCancel,
    );
    assert_eq!(plan.count(), 0);
}

#[test]
fn test_missing_schedule_with_immediate_attempt() {
    let plan = Retry::<crate::seq::sources::Repeat<Duration>, _>::from_optional(None, NeverCancel);
    assert_eq!(plan.to_vec(), vec![(0, Duration::ZERO)]);
}

#[test]
fn test_empty_schedule() {
    assert_eq!(retry(empty(), NeverCancel).to_vec(), vec![(0, Duration::ZERO)]);
    assert_eq!(retry_after_delay(empty(), NeverCancel).count(), 0);
}

#[test]
fn test_cancel_before_start() {
    let token = CancelToken::new();
    token.cancel();

    let start = Instant::now();
    assert_eq!(retry_after_delay(repeat(Duration::from_secs(60)), &token).count(), 0);
    assert_eq!(
        retry(repeat(Duration::from_secs(60)), &token).to_vec(),
        vec![(0, Duration::ZERO)]
    );
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_cancel_during_wait_ends_plan() {
    let token = CancelToken::new();
    let remote = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(ms(100));
        remote.cancel();
    });

    let start = Instant::now();
    let attempts = retry(repeat(Duration::from_secs(30)), &token).to_vec();

    assert_eq!(attempts, vec![(0, Duration::ZERO)]);
    assert!(start.elapsed() < Duration::from_secs(10));
    canceller.join().unwrap();
}

#[test]
fn test_cancel_after_some_attempts() {
    let token = CancelToken::new();
    let mut seen = Vec::new();
    retry_after_delay(repeat(ms(1)), &token).produce(|pair| {
        seen.push(pair);
        if pair.0 == 2 {
            token.cancel();
        }
        true
    });
    assert_eq!(seen, vec![(1, ms(1)), (2, ms(1))]);
}

#[test]
fn test_cancel_after_schedule_is_exhausted_has_no_effect() {
    let token = CancelToken::new();
    let attempts = retry_after_delay(of(vec![ms(1)]), &token).to_vec();
    token.cancel();
    assert_eq!(attempts, vec![(1, ms(1))]);
}

#[test]
fn test_plan_is_retraversable() {
    let plan = retry(of(vec![ms(1), ms(1)]), NeverCancel);
    assert_eq!(plan.to_vec(), plan.to_vec());
}

#[test]
fn test_backoff_retry_plan() {
    let backoff = Backoff::exponential(ms(1)).with_max_retries(3);
    assert_eq!(
        backoff.retry(NeverCancel).to_vec(),
        vec![(0, Duration::ZERO), (1, ms(1)), (2, ms(2)), (3, ms(4))]
    );
    assert_eq!(
        backoff.retry_after_delay(NeverCancel).to_vec(),
        vec![(1, ms(1)), (2, ms(2)), (3, ms(4))]
    );
}

#[test]
fn test_elapsed_budget_bounds_plan() {
    let backoff = Backoff::constant(ms(20)).with_max_elapsed(ms(70));
    let attempts = backoff.retry_after_delay(NeverCancel).to_vec();
    // the budget is checked when the schedule yields, before each wait
    assert!(!attempts.is_empty());
    assert!(attempts.len() <= 5);
}

#[cfg(feature = "tracing")]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_attempts_are_logged() {
        retry_after_delay(of(vec![ms(1)]), NeverCancel).count();
        assert!(logs_contain("retry attempt"));
    }

    #[test]
    #[traced_test]
    fn test_cancellation_is_logged() {
        let token = CancelToken::new();
        token.cancel();
        retry_after_delay(of(vec![ms(1)]), &token).count();
        assert!(logs_contain("retry plan cancelled"));
    }
}

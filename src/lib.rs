//! # Seqflow
//!
//! Lazy, restartable push sequences with composable combinators, and retry
//! plans built on top of them.
//!
//! A [`Seq`] is a producer that pushes values into a receiver closure until
//! the receiver answers `false` or the values run out. Nothing is computed
//! until a traversal starts, and a sequence can be traversed any number of
//! times.
//!
//! - **Sources**: `of`, `from_iter`, `repeat`, `exponential`, `from_fn`, ...
//! - **Combinators**: [`SeqExt`] and [`PairSeqExt`] methods such as
//!   `filter`, `map`, `dedup`, `trim`, `jitter` and `max_elapsed`
//! - **Aggregates**: `reduce`, `count`, `equal`, `group`, `merge`, ...
//! - **Retry**: [`retry::Retry`] turns a delay schedule into a cancellable
//!   sequence of attempts
//!
//! ## Quick Example
//!
//! ```rust
//! use seqflow::prelude::*;
//! use std::time::Duration;
//!
//! // 1ms, 2ms, 4ms, ... capped at 10ms, five retries at most
//! let delays = exponential(Duration::from_millis(1), Duration::from_millis(10), 2.0).trim(5);
//!
//! let token = CancelToken::new();
//! let mut calls = 0;
//! retry(delays, &token).produce(|(attempt, _delay)| {
//!     calls += 1;
//!     attempt < 3 // pretend the fourth call succeeds
//! });
//!
//! assert_eq!(calls, 4);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod retry;
pub mod seq;

// Re-exports
pub use retry::{Backoff, BackoffError, CancelToken, Cancellation, NeverCancel};
pub use seq::{BoxedSeq, Magnitude, PairSeqExt, Pull, Seq, Seq2, SeqExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::retry::{
        retry, retry_after_delay, Backoff, BackoffError, CancelToken, Cancellation, NeverCancel,
        Retry, RetryAfterDelay,
    };
    pub use crate::seq::aggregate::{
        contains, count, count_by, count_pairs_by, equal, equal_by, group, group_by, merge,
        merge2, reduce, to_vec,
    };
    pub use crate::seq::combinators::*;
    pub use crate::seq::sources::{
        empty, exponential, from_fn, from_iter, of, refs, repeat, Empty, Exponential, FromFn,
        FromIter, Of, Refs, Repeat,
    };
    pub use crate::seq::{BoxedSeq, Magnitude, PairSeqExt, Pull, Seq, Seq2, SeqExt};
}

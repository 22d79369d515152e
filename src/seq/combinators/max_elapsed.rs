//! Wall-clock budget for a traversal.

use std::time::{Duration, Instant};

use crate::seq::trait_def::Seq;

/// Stops the sequence once more than `budget` has passed since the
/// traversal began.
///
/// Created by [`SeqExt::max_elapsed`](crate::seq::ext::SeqExt::max_elapsed).
/// The clock is read when each value arrives; a value that arrives after
/// the budget is spent is dropped and the source is stopped. Each
/// traversal has its own start instant.
#[derive(Debug, Clone)]
pub struct MaxElapsed<S> {
    pub(crate) inner: S,
    pub(crate) budget: Duration,
}

impl<S: Seq> Seq for MaxElapsed<S> {
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let start = Instant::now();
        self.inner.produce(|v| {
            if start.elapsed() > self.budget {
                #[cfg(feature = "tracing")]
                tracing::trace!(budget = ?self.budget, "elapsed time budget exhausted");
                return false;
            }
            receiver(v)
        })
    }
}

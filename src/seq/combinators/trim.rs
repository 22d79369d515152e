//! Trim combinator - cap a sequence at a number of values.

use crate::seq::trait_def::Seq;

/// Yields at most `count` values.
///
/// Created by [`SeqExt::trim`](crate::seq::ext::SeqExt::trim).
///
/// The source is stopped right after the last allowed value is delivered,
/// so it is never asked for value `count + 1`. With `count == 0` the
/// source is not started at all.
#[derive(Debug, Clone)]
pub struct Trim<S> {
    pub(crate) inner: S,
    pub(crate) count: usize,
}

impl<S: Seq> Seq for Trim<S> {
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        if self.count == 0 {
            return;
        }
        let mut taken = 0;
        self.inner.produce(|v| {
            taken += 1;
            receiver(v) && taken < self.count
        })
    }
}

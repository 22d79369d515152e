//! Positional numbering.

use crate::seq::trait_def::Seq;

/// Pairs every value with its 0-based position.
///
/// Created by [`SeqExt::with_index`](crate::seq::ext::SeqExt::with_index).
/// The counter restarts at 0 on every traversal.
#[derive(Debug, Clone)]
pub struct WithIndex<S> {
    pub(crate) inner: S,
}

impl<S: Seq> Seq for WithIndex<S> {
    type Item = (usize, S::Item);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((usize, S::Item)) -> bool,
    {
        let mut index = 0;
        self.inner.produce(|v| {
            let keep_going = receiver((index, v));
            index += 1;
            keep_going
        })
    }
}

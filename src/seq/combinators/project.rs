//! Projections from pair sequences down to single-value sequences.

use crate::seq::trait_def::Seq;

/// The keys of a pair sequence.
///
/// Created by [`PairSeqExt::keys`](crate::seq::ext::PairSeqExt::keys).
#[derive(Debug, Clone)]
pub struct Keys<S> {
    pub(crate) inner: S,
}

impl<S, K, V> Seq for Keys<S>
where
    S: Seq<Item = (K, V)>,
{
    type Item = K;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(K) -> bool,
    {
        self.inner.produce(|(k, _)| receiver(k))
    }
}

/// The values of a pair sequence.
///
/// Created by [`PairSeqExt::values`](crate::seq::ext::PairSeqExt::values).
#[derive(Debug, Clone)]
pub struct Values<S> {
    pub(crate) inner: S,
}

impl<S, K, V> Seq for Values<S>
where
    S: Seq<Item = (K, V)>,
{
    type Item = V;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(V) -> bool,
    {
        self.inner.produce(|(_, v)| receiver(v))
    }
}

//! Filter combinators - keep only the values a predicate accepts.

use crate::seq::trait_def::Seq;

/// A sequence that keeps only the values matching a predicate.
///
/// Created by [`SeqExt::filter`](crate::seq::ext::SeqExt::filter).
#[derive(Clone)]
pub struct Filter<S, P> {
    pub(crate) inner: S,
    pub(crate) pred: P,
}

impl<S: std::fmt::Debug, P> std::fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("pred", &"<function>")
            .finish()
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        self.inner
            .produce(|v| if (self.pred)(&v) { receiver(v) } else { true })
    }
}

/// A pair sequence that keeps only the pairs matching a predicate.
///
/// Created by [`PairSeqExt::filter_pairs`](crate::seq::ext::PairSeqExt::filter_pairs).
#[derive(Clone)]
pub struct FilterPairs<S, P> {
    pub(crate) inner: S,
    pub(crate) pred: P,
}

impl<S: std::fmt::Debug, P> std::fmt::Debug for FilterPairs<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPairs")
            .field("inner", &self.inner)
            .field("pred", &"<function>")
            .finish()
    }
}

impl<S, P, K, V> Seq for FilterPairs<S, P>
where
    S: Seq<Item = (K, V)>,
    P: Fn(&K, &V) -> bool,
{
    type Item = (K, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V)) -> bool,
    {
        self.inner.produce(|(k, v)| {
            if (self.pred)(&k, &v) {
                receiver((k, v))
            } else {
                true
            }
        })
    }
}

//! Drop absent values.

use crate::seq::trait_def::Seq;

/// Skips `None` and unwraps `Some`.
///
/// Created by [`SeqExt::not_none`](crate::seq::ext::SeqExt::not_none).
#[derive(Debug, Clone)]
pub struct NotNone<S> {
    pub(crate) inner: S,
}

impl<S, T> Seq for NotNone<S>
where
    S: Seq<Item = Option<T>>,
{
    type Item = T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(T) -> bool,
    {
        self.inner.produce(|v| match v {
            Some(v) => receiver(v),
            None => true,
        })
    }
}

/// Skips pairs whose value is `None` and unwraps the rest.
///
/// Created by [`PairSeqExt::not_none_values`](crate::seq::ext::PairSeqExt::not_none_values).
#[derive(Debug, Clone)]
pub struct NotNoneValues<S> {
    pub(crate) inner: S,
}

impl<S, K, V> Seq for NotNoneValues<S>
where
    S: Seq<Item = (K, Option<V>)>,
{
    type Item = (K, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V)) -> bool,
    {
        self.inner.produce(|(k, v)| match v {
            Some(v) => receiver((k, v)),
            None => true,
        })
    }
}

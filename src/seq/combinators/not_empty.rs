//! Drop zero values.
//!
//! "Empty" means equal to the type's `Default`: `0`, `""`, `false`,
//! an empty `Vec`, and so on.

use crate::seq::trait_def::Seq;

/// Skips values equal to `T::default()`.
///
/// Created by [`SeqExt::not_empty`](crate::seq::ext::SeqExt::not_empty).
#[derive(Debug, Clone)]
pub struct NotEmpty<S> {
    pub(crate) inner: S,
}

impl<S> Seq for NotEmpty<S>
where
    S: Seq,
    S::Item: Default + PartialEq,
{
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let zero = S::Item::default();
        self.inner
            .produce(|v| if v != zero { receiver(v) } else { true })
    }
}

/// Skips pairs whose value equals `V::default()`.
///
/// Created by [`PairSeqExt::not_empty_values`](crate::seq::ext::PairSeqExt::not_empty_values).
#[derive(Debug, Clone)]
pub struct NotEmptyValues<S> {
    pub(crate) inner: S,
}

impl<S, K, V> Seq for NotEmptyValues<S>
where
    S: Seq<Item = (K, V)>,
    V: Default + PartialEq,
{
    type Item = (K, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V)) -> bool,
    {
        let zero = V::default();
        self.inner
            .produce(|(k, v)| if v != zero { receiver((k, v)) } else { true })
    }
}

//! Map combinators - element-wise transformations.
//!
//! All of these are one-in, one-out: nothing is buffered, and the stop
//! signal of the downstream receiver is returned straight to the source.

use crate::seq::trait_def::Seq;

/// Map combinator - transforms every value.
///
/// Created by [`SeqExt::map`](crate::seq::ext::SeqExt::map).
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let tens = from_iter(0..4).map(|i| i * 10);
/// assert_eq!(tens.to_vec(), vec![0, 10, 20, 30]);
/// ```
#[derive(Clone)]
pub struct Map<S, G> {
    pub(crate) inner: S,
    pub(crate) f: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for Map<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, G, U> Seq for Map<S, G>
where
    S: Seq,
    G: Fn(S::Item) -> U,
{
    type Item = U;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(U) -> bool,
    {
        self.inner.produce(|v| receiver((self.f)(v)))
    }
}

/// Turns each value into a `(key, value)` pair using a key function.
///
/// Created by [`SeqExt::with_keys`](crate::seq::ext::SeqExt::with_keys).
#[derive(Clone)]
pub struct WithKeys<S, G> {
    pub(crate) inner: S,
    pub(crate) key: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for WithKeys<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WithKeys")
            .field("inner", &self.inner)
            .field("key", &"<function>")
            .finish()
    }
}

impl<S, G, K> Seq for WithKeys<S, G>
where
    S: Seq,
    G: Fn(&S::Item) -> K,
{
    type Item = (K, S::Item);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, S::Item)) -> bool,
    {
        self.inner.produce(|v| receiver(((self.key)(&v), v)))
    }
}

/// Splits each value into a pair.
///
/// Created by [`SeqExt::to_pairs`](crate::seq::ext::SeqExt::to_pairs).
#[derive(Clone)]
pub struct ToPairs<S, G> {
    pub(crate) inner: S,
    pub(crate) split: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for ToPairs<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToPairs")
            .field("inner", &self.inner)
            .field("split", &"<function>")
            .finish()
    }
}

impl<S, G, K, V> Seq for ToPairs<S, G>
where
    S: Seq,
    G: Fn(S::Item) -> (K, V),
{
    type Item = (K, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V)) -> bool,
    {
        self.inner.produce(|v| receiver((self.split)(v)))
    }
}

/// Transforms every pair.
///
/// Created by [`PairSeqExt::map_pairs`](crate::seq::ext::PairSeqExt::map_pairs).
#[derive(Clone)]
pub struct MapPairs<S, G> {
    pub(crate) inner: S,
    pub(crate) f: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for MapPairs<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapPairs")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, G, K, V, K2, V2> Seq for MapPairs<S, G>
where
    S: Seq<Item = (K, V)>,
    G: Fn(K, V) -> (K2, V2),
{
    type Item = (K2, V2);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K2, V2)) -> bool,
    {
        self.inner.produce(|(k, v)| receiver((self.f)(k, v)))
    }
}

/// Transforms the key of every pair, keeping the value.
///
/// Created by [`PairSeqExt::map_keys`](crate::seq::ext::PairSeqExt::map_keys).
#[derive(Clone)]
pub struct MapKeys<S, G> {
    pub(crate) inner: S,
    pub(crate) f: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for MapKeys<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapKeys")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, G, K, V, K2> Seq for MapKeys<S, G>
where
    S: Seq<Item = (K, V)>,
    G: Fn(K) -> K2,
{
    type Item = (K2, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K2, V)) -> bool,
    {
        self.inner.produce(|(k, v)| receiver(((self.f)(k), v)))
    }
}

/// Transforms the value of every pair, keeping the key.
///
/// Created by [`PairSeqExt::map_values`](crate::seq::ext::PairSeqExt::map_values).
#[derive(Clone)]
pub struct MapValues<S, G> {
    pub(crate) inner: S,
    pub(crate) f: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for MapValues<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapValues")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, G, K, V, V2> Seq for MapValues<S, G>
where
    S: Seq<Item = (K, V)>,
    G: Fn(V) -> V2,
{
    type Item = (K, V2);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V2)) -> bool,
    {
        self.inner.produce(|(k, v)| receiver((k, (self.f)(v))))
    }
}

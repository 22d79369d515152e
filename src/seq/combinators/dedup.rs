//! Deduplication combinators.
//!
//! Each traversal builds its own `HashSet` of keys already emitted, so a
//! sequence can be re-traversed and two traversals never see each other's
//! state. The first occurrence of a key wins; later ones are dropped
//! silently and the original order is kept.

use std::collections::HashSet;
use std::hash::Hash;

use crate::seq::trait_def::Seq;

/// Drops values equal to one already emitted.
///
/// Created by [`SeqExt::dedup`](crate::seq::ext::SeqExt::dedup).
#[derive(Debug, Clone)]
pub struct Dedup<S> {
    pub(crate) inner: S,
}

impl<S> Seq for Dedup<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let mut seen = HashSet::new();
        self.inner.produce(|v| {
            if seen.insert(v.clone()) {
                receiver(v)
            } else {
                true
            }
        })
    }
}

/// Drops values whose derived key was already emitted.
///
/// Created by [`SeqExt::dedup_by_key`](crate::seq::ext::SeqExt::dedup_by_key).
#[derive(Clone)]
pub struct DedupByKey<S, G> {
    pub(crate) inner: S,
    pub(crate) key: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for DedupByKey<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DedupByKey")
            .field("inner", &self.inner)
            .field("key", &"<function>")
            .finish()
    }
}

impl<S, G, D> Seq for DedupByKey<S, G>
where
    S: Seq,
    G: Fn(&S::Item) -> D,
    D: Eq + Hash,
{
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let mut seen = HashSet::new();
        self.inner.produce(|v| {
            if seen.insert((self.key)(&v)) {
                receiver(v)
            } else {
                true
            }
        })
    }
}

/// Drops pairs whose derived key was already emitted.
///
/// Created by [`PairSeqExt::dedup_pairs_by`](crate::seq::ext::PairSeqExt::dedup_pairs_by).
#[derive(Clone)]
pub struct DedupPairsBy<S, G> {
    pub(crate) inner: S,
    pub(crate) key: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for DedupPairsBy<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DedupPairsBy")
            .field("inner", &self.inner)
            .field("key", &"<function>")
            .finish()
    }
}

impl<S, G, K, V, D> Seq for DedupPairsBy<S, G>
where
    S: Seq<Item = (K, V)>,
    G: Fn(&K, &V) -> D,
    D: Eq + Hash,
{
    type Item = (K, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V)) -> bool,
    {
        let mut seen = HashSet::new();
        self.inner.produce(|(k, v)| {
            if seen.insert((self.key)(&k, &v)) {
                receiver((k, v))
            } else {
                true
            }
        })
    }
}

/// Keeps only the first pair for each distinct key.
///
/// Created by [`PairSeqExt::dedup_keys`](crate::seq::ext::PairSeqExt::dedup_keys).
#[derive(Debug, Clone)]
pub struct DedupKeys<S> {
    pub(crate) inner: S,
}

impl<S, K, V> Seq for DedupKeys<S>
where
    S: Seq<Item = (K, V)>,
    K: Eq + Hash + Clone,
{
    type Item = (K, V);

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut((K, V)) -> bool,
    {
        let mut seen = HashSet::new();
        self.inner.produce(|(k, v)| {
            if seen.insert(k.clone()) {
                receiver((k, v))
            } else {
                true
            }
        })
    }
}

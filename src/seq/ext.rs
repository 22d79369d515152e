//! Extension traits providing combinator methods for all sequences.
//!
//! [`SeqExt`] is implemented for every [`Seq`]; [`PairSeqExt`] for every
//! sequence of `(K, V)` pairs. Neither needs to be implemented by hand.
//!
//! Combinators take `self` by value and return a new sequence. To build
//! on a sequence without giving it up, borrow it: `Seq` is implemented
//! for `&S`.
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let numbers = from_iter(0..10);
//! let evens = (&numbers).filter(|n| n % 2 == 0);
//! let odds = (&numbers).filter(|n| n % 2 == 1);
//!
//! assert_eq!(evens.count() + odds.count(), numbers.count());
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::RngCore;

use crate::seq::aggregate;
use crate::seq::boxed::BoxedSeq;
use crate::seq::combinators::{
    Chain, Dedup, DedupByKey, DedupKeys, DedupPairsBy, Filter, FilterPairs, Inspect, Jitter, Keys,
    Map, MapKeys, MapPairs, MapValues, MaxElapsed, NotEmpty, NotEmptyValues, NotNone,
    NotNoneValues, ToPairs, Trim, Values, WithIndex, WithKeys,
};
use crate::seq::magnitude::Magnitude;
use crate::seq::trait_def::Seq;

/// Extension trait providing combinator and aggregate methods for all
/// sequences.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let firsts = of(vec![10, 0, 1, 1, 2, 2, 5, 5, 7, 9, 9, 10])
///     .dedup()
///     .not_empty()
///     .map(|v| v * 2)
///     .trim(4);
///
/// assert_eq!(firsts.to_vec(), vec![20, 2, 4, 10]);
/// ```
pub trait SeqExt: Seq + Sized {
    /// Keep only the values for which `pred` returns `true`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter { inner: self, pred }
    }

    /// Transform every value.
    fn map<U, G>(self, f: G) -> Map<Self, G>
    where
        G: Fn(Self::Item) -> U,
    {
        Map { inner: self, f }
    }

    /// Skip `None`, yield the contents of `Some`.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    ///
    /// let present = of(vec![Some(1), None, Some(3)]).not_none();
    /// assert_eq!(present.to_vec(), vec![1, 3]);
    /// ```
    fn not_none<T>(self) -> NotNone<Self>
    where
        Self: Seq<Item = Option<T>>,
    {
        NotNone { inner: self }
    }

    /// Skip values equal to the type's default (`0`, `""`, `false`, ...).
    fn not_empty(self) -> NotEmpty<Self>
    where
        Self::Item: Default + PartialEq,
    {
        NotEmpty { inner: self }
    }

    /// Pair each value with its 0-based position.
    fn with_index(self) -> WithIndex<Self> {
        WithIndex { inner: self }
    }

    /// Pair each value with a key derived from it: `(key(&v), v)`.
    fn with_keys<K, G>(self, key: G) -> WithKeys<Self, G>
    where
        G: Fn(&Self::Item) -> K,
    {
        WithKeys { inner: self, key }
    }

    /// Split each value into a `(key, value)` pair.
    fn to_pairs<K, V, G>(self, split: G) -> ToPairs<Self, G>
    where
        G: Fn(Self::Item) -> (K, V),
    {
        ToPairs { inner: self, split }
    }

    /// Yield at most `count` values.
    fn trim(self, count: usize) -> Trim<Self> {
        Trim { inner: self, count }
    }

    /// Drop values equal to one already yielded. First occurrence wins.
    fn dedup(self) -> Dedup<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Dedup { inner: self }
    }

    /// Drop values whose derived key was already yielded.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    ///
    /// let words = of(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let one_per_letter = words.dedup_by_key(|w| w.chars().next());
    /// assert_eq!(one_per_letter.to_vec(), vec!["apple", "banana", "cherry"]);
    /// ```
    fn dedup_by_key<D, G>(self, key: G) -> DedupByKey<Self, G>
    where
        G: Fn(&Self::Item) -> D,
        D: Eq + Hash,
    {
        DedupByKey { inner: self, key }
    }

    /// Randomize each value by up to `±factor` of itself, using the
    /// thread-local random source.
    fn jitter(self, factor: f64) -> Jitter<Self, ThreadRng>
    where
        Self::Item: Magnitude,
    {
        self.jitter_with(factor, rand::rng())
    }

    /// Randomize each value by up to `±factor` of itself, drawing from
    /// `rng`. Each traversal uses a fresh clone of `rng`.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let jittered = repeat(100.0).jitter_with(0.1, StdRng::seed_from_u64(42)).trim(50);
    /// assert!(jittered.to_vec().iter().all(|v| (90.0..110.0).contains(v)));
    /// ```
    fn jitter_with<R>(self, factor: f64, rng: R) -> Jitter<Self, R>
    where
        Self::Item: Magnitude,
        R: RngCore + Clone,
    {
        Jitter {
            inner: self,
            factor,
            rng,
        }
    }

    /// Stop once more than `budget` has passed since the traversal began.
    fn max_elapsed(self, budget: Duration) -> MaxElapsed<Self> {
        MaxElapsed {
            inner: self,
            budget,
        }
    }

    /// Yield all of `self`, then all of `other`.
    fn chain<B>(self, other: B) -> Chain<Self, B>
    where
        B: Seq<Item = Self::Item>,
    {
        Chain {
            first: self,
            second: other,
        }
    }

    /// Call `f` on every value as it passes through.
    fn inspect<G>(self, f: G) -> Inspect<Self, G>
    where
        G: Fn(&Self::Item),
    {
        Inspect { inner: self, f }
    }

    /// Erase the concrete type.
    fn boxed<'a>(self) -> BoxedSeq<'a, Self::Item>
    where
        Self: 'a,
    {
        BoxedSeq::new(self)
    }

    /// Left fold over the whole sequence.
    fn reduce<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, Self::Item) -> R,
    {
        aggregate::reduce(self, initial, f)
    }

    /// Number of values.
    fn count(&self) -> usize {
        aggregate::count(self)
    }

    /// Number of values matching `pred`.
    fn count_by<P>(&self, pred: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        aggregate::count_by(self, pred)
    }

    /// Whether any value equals `value`. Stops at the first match.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        aggregate::contains(value, self)
    }

    /// Whether both sequences yield equal values and end together.
    ///
    /// Both sides must be `Sync`, which rules out `BoxedSeq` and
    /// sequences built with [`jitter`](SeqExt::jitter); see
    /// [`aggregate::equal_by`].
    fn equal<B>(&self, other: &B) -> bool
    where
        Self: Sync,
        B: Seq + Sync,
        Self::Item: PartialEq<B::Item> + Send,
        B::Item: Send,
    {
        aggregate::equal(self, other)
    }

    /// Compare with another sequence element by element using `eq`.
    fn equal_by<B, F>(&self, other: &B, eq: F) -> bool
    where
        Self: Sync,
        B: Seq + Sync,
        Self::Item: Send,
        B::Item: Send,
        F: FnMut(Self::Item, B::Item) -> bool,
    {
        aggregate::equal_by(self, other, eq)
    }

    /// Group values by a derived key, keeping per-key order.
    fn group_by<K, G>(&self, key: G) -> HashMap<K, Vec<Self::Item>>
    where
        K: Eq + Hash,
        G: Fn(&Self::Item) -> K,
    {
        aggregate::group_by(self, key)
    }

    /// Collect a finite sequence into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Item> {
        aggregate::to_vec(self)
    }
}

impl<S: Seq> SeqExt for S {}

/// Extension trait providing methods specific to pair sequences.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let scores = of(vec![("ann", 3), ("bob", 0), ("ann", 5), ("cy", 4)]);
///
/// let nonzero = (&scores).not_empty_values().map_values(|v| v * 10);
/// assert_eq!(nonzero.to_vec(), vec![("ann", 30), ("ann", 50), ("cy", 40)]);
///
/// let first_per_name = (&scores).dedup_keys().keys();
/// assert_eq!(first_per_name.to_vec(), vec!["ann", "bob", "cy"]);
/// ```
pub trait PairSeqExt<K, V>: Seq<Item = (K, V)> + Sized {
    /// Keep only the pairs for which `pred` returns `true`.
    fn filter_pairs<P>(self, pred: P) -> FilterPairs<Self, P>
    where
        P: Fn(&K, &V) -> bool,
    {
        FilterPairs { inner: self, pred }
    }

    /// Transform every pair.
    fn map_pairs<K2, V2, G>(self, f: G) -> MapPairs<Self, G>
    where
        G: Fn(K, V) -> (K2, V2),
    {
        MapPairs { inner: self, f }
    }

    /// Transform every key, keeping values.
    fn map_keys<K2, G>(self, f: G) -> MapKeys<Self, G>
    where
        G: Fn(K) -> K2,
    {
        MapKeys { inner: self, f }
    }

    /// Transform every value, keeping keys.
    fn map_values<V2, G>(self, f: G) -> MapValues<Self, G>
    where
        G: Fn(V) -> V2,
    {
        MapValues { inner: self, f }
    }

    /// Skip pairs whose value is `None`, yield the rest with the value
    /// unwrapped.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    ///
    /// let found = of(vec![("a", Some(1)), ("b", None), ("c", Some(3))]).not_none_values();
    /// assert_eq!(found.to_vec(), vec![("a", 1), ("c", 3)]);
    /// ```
    fn not_none_values<T>(self) -> NotNoneValues<Self>
    where
        NotNoneValues<Self>: Seq<Item = (K, T)>,
    {
        NotNoneValues { inner: self }
    }

    /// Skip pairs whose value equals `V::default()`.
    fn not_empty_values(self) -> NotEmptyValues<Self>
    where
        V: Default + PartialEq,
    {
        NotEmptyValues { inner: self }
    }

    /// Drop pairs whose derived key was already yielded.
    fn dedup_pairs_by<D, G>(self, key: G) -> DedupPairsBy<Self, G>
    where
        G: Fn(&K, &V) -> D,
        D: Eq + Hash,
    {
        DedupPairsBy { inner: self, key }
    }

    /// Keep only the first pair for each key.
    fn dedup_keys(self) -> DedupKeys<Self>
    where
        K: Eq + Hash + Clone,
    {
        DedupKeys { inner: self }
    }

    /// Drop the values, keep the keys.
    fn keys(self) -> Keys<Self> {
        Keys { inner: self }
    }

    /// Drop the keys, keep the values.
    fn values(self) -> Values<Self> {
        Values { inner: self }
    }

    /// Number of pairs matching `pred`.
    fn count_pairs_by<P>(&self, pred: P) -> usize
    where
        P: FnMut(&K, &V) -> bool,
    {
        aggregate::count_pairs_by(self, pred)
    }

    /// Collect into a map from key to the values seen for it, in order.
    fn group(&self) -> HashMap<K, Vec<V>>
    where
        K: Eq + Hash,
    {
        aggregate::group(self)
    }
}

impl<K, V, S> PairSeqExt<K, V> for S where S: Seq<Item = (K, V)> {}

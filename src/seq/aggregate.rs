//! Terminal operations - consume a sequence into a value.
//!
//! Everything here except [`merge`]/[`merge2`] drives a traversal to the
//! end (or to the first decisive value) and returns a plain result. The
//! same operations are available as methods on
//! [`SeqExt`](crate::seq::ext::SeqExt) and
//! [`PairSeqExt`](crate::seq::ext::PairSeqExt).
//!
//! `reduce`, `count`, `count_by` and the grouping functions consume the
//! whole sequence, so the sequence must be finite or bounded.

use std::collections::HashMap;
use std::hash::Hash;
use std::thread;

use crate::seq::combinators::Merge;
use crate::seq::pull::Pull;
use crate::seq::trait_def::Seq;

/// Left fold over the whole sequence.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let sum = reduce(&from_iter(1..=4), 0, |acc, v| acc + v);
/// assert_eq!(sum, 10);
/// ```
pub fn reduce<S, R, F>(seq: &S, initial: R, mut f: F) -> R
where
    S: Seq,
    F: FnMut(R, S::Item) -> R,
{
    let mut acc = Some(initial);
    seq.produce(|v| {
        acc = acc.take().map(|a| f(a, v));
        true
    });
    match acc {
        Some(acc) => acc,
        None => unreachable!("accumulator is put back after every step"),
    }
}

/// Number of values in the sequence.
pub fn count<S: Seq>(seq: &S) -> usize {
    let mut n = 0;
    seq.produce(|_| {
        n += 1;
        true
    });
    n
}

/// Number of values matching `pred`.
pub fn count_by<S, P>(seq: &S, mut pred: P) -> usize
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    let mut n = 0;
    seq.produce(|v| {
        if pred(&v) {
            n += 1;
        }
        true
    });
    n
}

/// Number of pairs matching `pred`.
pub fn count_pairs_by<S, K, V, P>(seq: &S, mut pred: P) -> usize
where
    S: Seq<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
    count_by(seq, |(k, v)| pred(k, v))
}

/// Whether the sequence contains `value`. Stops at the first match.
pub fn contains<S>(value: &S::Item, seq: &S) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    let mut found = false;
    seq.produce(|v| {
        found = v == *value;
        !found
    });
    found
}

/// Whether two sequences yield equal values and end together.
///
/// See [`equal_by`].
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// assert!(equal(&of(vec![1, 2, 3]), &from_iter(1..=3)));
/// assert!(!equal(&of(vec![1, 2]), &from_iter(1..=3)));
/// assert!(!equal(&repeat(1), &of(vec![1, 1, 2])));
/// ```
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: Seq + Sync,
    B: Seq + Sync,
    A::Item: PartialEq<B::Item> + Send,
    B::Item: Send,
{
    equal_by(a, b, |x, y| x == y)
}

/// Compare two sequences element by element with `eq`.
///
/// Both sequences are stepped in lockstep through a [`Pull`] each. The
/// result is `false` as soon as a pair compares unequal or one sequence
/// ends before the other, and `true` when both end at the same position.
/// Both pulls are stopped before returning, whichever way the comparison
/// ends, so an infinite sequence is abandoned cleanly at the first
/// mismatch. Two infinite sequences that never differ are never decided.
///
/// Each sequence is driven from a helper thread, hence the `Sync` and
/// `Send` bounds. [`BoxedSeq`](crate::seq::boxed::BoxedSeq) is not `Sync`,
/// and neither is a sequence jittered with the thread-local source
/// ([`SeqExt::jitter`](crate::seq::ext::SeqExt::jitter)) or
/// [`Backoff::schedule`](crate::retry::Backoff::schedule). Compare such
/// sequences by collecting them with `to_vec`, or jitter with a sendable
/// source such as `jitter_with(factor, StdRng::seed_from_u64(..))`.
pub fn equal_by<A, B, F>(a: &A, b: &B, mut eq: F) -> bool
where
    A: Seq + Sync,
    B: Seq + Sync,
    A::Item: Send,
    B::Item: Send,
    F: FnMut(A::Item, B::Item) -> bool,
{
    thread::scope(|scope| {
        let mut left = Pull::spawn(scope, a);
        let mut right = Pull::spawn(scope, b);
        let result = loop {
            match (left.next(), right.next()) {
                (Some(x), Some(y)) => {
                    if !eq(x, y) {
                        break false;
                    }
                }
                (None, None) => break true,
                _ => break false,
            }
        };
        left.stop();
        right.stop();
        result
    })
}

/// Concatenate sequences in order.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let all = merge(vec![of(vec![1, 2]), of(vec![]), of(vec![3])]);
/// assert_eq!(all.to_vec(), vec![1, 2, 3]);
///
/// let none = merge(Vec::<Of<i32>>::new());
/// assert_eq!(none.count(), 0);
/// ```
pub fn merge<S, I>(seqs: I) -> Merge<S>
where
    S: Seq,
    I: IntoIterator<Item = S>,
{
    Merge {
        seqs: seqs.into_iter().collect(),
    }
}

/// Concatenate pair sequences in order.
pub fn merge2<S, K, V, I>(seqs: I) -> Merge<S>
where
    S: Seq<Item = (K, V)>,
    I: IntoIterator<Item = S>,
{
    merge(seqs)
}

/// Collect a pair sequence into a map from key to the values seen for it,
/// in the order they appeared.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let groups = group(&of(vec![("a", 1), ("b", 2), ("a", 3)]));
/// assert_eq!(groups["a"], vec![1, 3]);
/// assert_eq!(groups["b"], vec![2]);
/// ```
pub fn group<S, K, V>(seq: &S) -> HashMap<K, Vec<V>>
where
    S: Seq<Item = (K, V)>,
    K: Eq + Hash,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    seq.produce(|(k, v)| {
        groups.entry(k).or_default().push(v);
        true
    });
    groups
}

/// Group the values of a sequence by a derived key.
pub fn group_by<S, K, G>(seq: &S, key: G) -> HashMap<K, Vec<S::Item>>
where
    S: Seq,
    K: Eq + Hash,
    G: Fn(&S::Item) -> K,
{
    let mut groups: HashMap<K, Vec<S::Item>> = HashMap::new();
    seq.produce(|v| {
        groups.entry(key(&v)).or_default().push(v);
        true
    });
    groups
}

/// Collect a finite sequence into a `Vec`.
pub fn to_vec<S: Seq>(seq: &S) -> Vec<S::Item> {
    let mut out = Vec::new();
    seq.produce(|v| {
        out.push(v);
        true
    });
    out
}

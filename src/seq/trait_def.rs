//! Seq trait definition - the core abstraction for lazy sequences.
//!
//! This module defines the `Seq` trait, which represents a producer that:
//! - Pushes values of type `Item` into a receiver, one at a time, in order
//! - Stops the moment the receiver answers `false`
//! - Can be traversed again from the beginning as often as needed
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Iterator` and `Future`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - Use `.boxed()` when you need type erasure
//!
//! Unlike an `Iterator`, a `Seq` is a *description* rather than a cursor.
//! `produce` borrows the sequence immutably, so every call starts a fresh,
//! independent traversal. Anything a traversal needs to remember (a dedup
//! set, a start instant, a counter) lives on the stack of that call.
//!
//! # Early Stop
//!
//! The receiver's return value is the only stop signal. A combinator must
//! forward `false` from its own receiver to the sequence it wraps and must
//! not do any further work afterwards:
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let mut seen = Vec::new();
//! repeat(7).produce(|v| {
//!     seen.push(v);
//!     seen.len() < 3
//! });
//! assert_eq!(seen, vec![7, 7, 7]);
//! ```

/// The core sequence trait - a restartable, lazy, push-style producer.
///
/// # Contract
///
/// * `receiver` is invoked once per value, in order.
/// * After `receiver` returns `false`, `produce` returns without calling it
///   again and without computing further values.
/// * Two calls to `produce` are two independent traversals.
///
/// # Example
///
/// ```rust
/// use seqflow::Seq;
///
/// struct Countdown(u32);
///
/// impl Seq for Countdown {
///     type Item = u32;
///
///     fn produce<F>(&self, mut receiver: F)
///     where
///         F: FnMut(u32) -> bool,
///     {
///         for n in (1..=self.0).rev() {
///             if !receiver(n) {
///                 return;
///             }
///         }
///     }
/// }
///
/// let mut out = Vec::new();
/// Countdown(3).produce(|n| {
///     out.push(n);
///     true
/// });
/// assert_eq!(out, vec![3, 2, 1]);
/// ```
pub trait Seq {
    /// The type of the values produced.
    type Item;

    /// Run one traversal, pushing every value into `receiver` until it
    /// returns `false` or the sequence ends.
    fn produce<F>(&self, receiver: F)
    where
        F: FnMut(Self::Item) -> bool;
}

impl<S: Seq> Seq for &S {
    type Item = S::Item;

    fn produce<F>(&self, receiver: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).produce(receiver)
    }
}

impl<S: Seq> Seq for Box<S> {
    type Item = S::Item;

    fn produce<F>(&self, receiver: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).produce(receiver)
    }
}

/// A sequence of key/value pairs.
///
/// Pair sequences are ordinary sequences whose items are `(K, V)` tuples.
/// This trait only names that bound; it is implemented for every such
/// sequence and never needs to be implemented by hand.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// fn total<S: Seq2<&'static str, i32>>(pairs: S) -> i32 {
///     pairs.values().reduce(0, |acc, v| acc + v)
/// }
///
/// assert_eq!(total(of(vec![("a", 1), ("b", 2)])), 3);
/// ```
pub trait Seq2<K, V>: Seq<Item = (K, V)> {}

impl<K, V, S> Seq2<K, V> for S where S: Seq<Item = (K, V)> {}

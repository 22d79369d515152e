//! BoxedSeq - type-erased sequence for opt-in boxing.
//!
//! Use `BoxedSeq` when you need to:
//! - Store different sequence types in a collection (for example to `merge` them)
//! - Return different sequences from match arms
//! - Hide a long combinator chain behind a nameable type

use crate::seq::trait_def::Seq;

/// Object-safe mirror of [`Seq`], used only behind [`BoxedSeq`].
trait ErasedSeq<T> {
    fn produce_erased(&self, receiver: &mut dyn FnMut(T) -> bool);
}

impl<S: Seq> ErasedSeq<S::Item> for S {
    fn produce_erased(&self, receiver: &mut dyn FnMut(S::Item) -> bool) {
        self.produce(receiver)
    }
}

/// A type-erased sequence.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// // Different combinator chains, one element type
/// let seqs: Vec<BoxedSeq<'_, i32>> = vec![
///     of(vec![1, 2]).boxed(),
///     repeat(9).trim(2).boxed(),
///     from_iter(0..3).map(|x| x * 10).boxed(),
/// ];
///
/// assert_eq!(merge(seqs).to_vec(), vec![1, 2, 9, 9, 0, 10, 20]);
/// ```
pub struct BoxedSeq<'a, T> {
    inner: Box<dyn ErasedSeq<T> + 'a>,
}

impl<T> std::fmt::Debug for BoxedSeq<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedSeq")
            .field("inner", &"<sequence>")
            .finish()
    }
}

impl<'a, T> BoxedSeq<'a, T> {
    /// Box any sequence.
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'a,
    {
        BoxedSeq {
            inner: Box::new(seq),
        }
    }
}

impl<T> Seq for BoxedSeq<'_, T> {
    type Item = T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(T) -> bool,
    {
        self.inner.produce_erased(&mut receiver)
    }
}

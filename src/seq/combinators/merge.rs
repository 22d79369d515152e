//! Concatenation of sequences.

use crate::seq::trait_def::Seq;

/// Several sequences of one type, traversed back to back.
///
/// Created by [`merge`](crate::seq::aggregate::merge) and
/// [`merge2`](crate::seq::aggregate::merge2). Once the receiver says
/// stop, the remaining sources are never started.
#[derive(Debug, Clone)]
pub struct Merge<S> {
    pub(crate) seqs: Vec<S>,
}

impl<S: Seq> Seq for Merge<S> {
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        for seq in &self.seqs {
            let mut open = true;
            seq.produce(|v| {
                open = receiver(v);
                open
            });
            if !open {
                return;
            }
        }
    }
}

/// Two sequences of possibly different types, traversed back to back.
///
/// Created by [`SeqExt::chain`](crate::seq::ext::SeqExt::chain).
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(A::Item) -> bool,
    {
        let mut open = true;
        self.first.produce(|v| {
            open = receiver(v);
            open
        });
        if open {
            self.second.produce(receiver);
        }
    }
}

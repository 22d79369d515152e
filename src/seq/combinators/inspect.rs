//! Inspect combinator - observe values without changing them.

use crate::seq::trait_def::Seq;

/// Calls a function with a reference to each value before passing it on.
///
/// Created by [`SeqExt::inspect`](crate::seq::ext::SeqExt::inspect).
#[derive(Clone)]
pub struct Inspect<S, G> {
    pub(crate) inner: S,
    pub(crate) f: G,
}

impl<S: std::fmt::Debug, G> std::fmt::Debug for Inspect<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspect")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, G> Seq for Inspect<S, G>
where
    S: Seq,
    G: Fn(&S::Item),
{
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        self.inner.produce(|v| {
            (self.f)(&v);
            receiver(v)
        })
    }
}

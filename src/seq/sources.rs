//! Source constructors - the sequences every chain starts from.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! assert_eq!(of(vec!["a", "b"]).to_vec(), vec!["a", "b"]);
//! assert_eq!(from_iter(1..=3).to_vec(), vec![1, 2, 3]);
//! assert_eq!(repeat('x').trim(2).to_vec(), vec!['x', 'x']);
//! assert_eq!(exponential(1, 100, 2.0).trim(8).to_vec(), vec![1, 2, 4, 8, 16, 32, 64, 100]);
//! ```

use std::marker::PhantomData;

use crate::seq::magnitude::Magnitude;
use crate::seq::trait_def::Seq;

/// A finite sequence over a fixed list of values.
///
/// Created by [`of`]. Values are cloned out on every traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Of<T> {
    values: Vec<T>,
}

impl<T: Clone> Seq for Of<T> {
    type Item = T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(T) -> bool,
    {
        for v in &self.values {
            if !receiver(v.clone()) {
                return;
            }
        }
    }
}

/// Create a finite sequence over the given values, in order.
pub fn of<T: Clone>(values: impl Into<Vec<T>>) -> Of<T> {
    Of {
        values: values.into(),
    }
}

/// A sequence backed by a cloneable iterable.
///
/// Created by [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: I,
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(I::Item) -> bool,
    {
        for v in self.iter.clone() {
            if !receiver(v) {
                return;
            }
        }
    }
}

/// Lift any cloneable iterable (a range, `slice.iter()`, a `Vec`, ...)
/// into a sequence. Each traversal iterates a fresh clone.
pub fn from_iter<I>(iter: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iter }
}

/// References to the elements of a slice.
///
/// Created by [`refs`].
#[derive(Debug, Clone, Copy)]
pub struct Refs<'a, T> {
    slice: &'a [T],
}

impl<'a, T> Seq for Refs<'a, T> {
    type Item = &'a T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(&'a T) -> bool,
    {
        for v in self.slice {
            if !receiver(v) {
                return;
            }
        }
    }
}

/// Create a sequence of references to the elements of `slice`.
pub fn refs<T>(slice: &[T]) -> Refs<'_, T> {
    Refs { slice }
}

/// A sequence that yields nothing.
///
/// Created by [`empty`].
#[derive(Debug)]
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn produce<F>(&self, _receiver: F)
    where
        F: FnMut(T) -> bool,
    {
    }
}

/// Create an empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// An infinite sequence of one value.
///
/// Created by [`repeat`]. Bound it with `trim`, `max_elapsed` or a
/// receiver that eventually says stop.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(T) -> bool,
    {
        while receiver(self.value.clone()) {}
    }
}

/// Repeat `value` forever.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// An infinite, capped geometric progression.
///
/// Created by [`exponential`].
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential<T> {
    start: T,
    max: T,
    factor: f64,
}

impl<T: Magnitude> Seq for Exponential<T> {
    type Item = T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(T) -> bool,
    {
        let mut v = cap(self.start, self.max);
        loop {
            if !receiver(v) {
                return;
            }
            if v < self.max {
                v = cap(T::from_f64(v.to_f64() * self.factor), self.max);
            }
        }
    }
}

fn cap<T: Magnitude>(v: T, max: T) -> T {
    if v > max {
        max
    } else {
        v
    }
}

/// Create the infinite sequence `start, start * factor, start * factor², ...`
/// where every value is capped at `max`. Once the ceiling is reached the
/// sequence stays there.
///
/// Works for integers, floats and [`Duration`](std::time::Duration).
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
/// use std::time::Duration;
///
/// let delays = exponential(Duration::from_millis(100), Duration::from_secs(1), 2.0)
///     .trim(5)
///     .to_vec();
///
/// assert_eq!(
///     delays,
///     vec![
///         Duration::from_millis(100),
///         Duration::from_millis(200),
///         Duration::from_millis(400),
///         Duration::from_millis(800),
///         Duration::from_secs(1),
///     ]
/// );
/// ```
pub fn exponential<T: Magnitude>(start: T, max: T, factor: f64) -> Exponential<T> {
    Exponential { start, max, factor }
}

/// A sequence defined by a closure.
///
/// Created by [`from_fn`].
pub struct FromFn<F, T> {
    f: F,
    _marker: PhantomData<fn() -> T>,
}

impl<F, T> std::fmt::Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<G, T> Seq for FromFn<G, T>
where
    G: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(T) -> bool,
    {
        (self.f)(&mut receiver)
    }
}

/// Build a sequence from a closure that pushes values into the receiver it
/// is handed. The closure must honour the receiver's stop signal.
///
/// # Example
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let evens = from_fn(|receiver: &mut dyn FnMut(u32) -> bool| {
///     let mut n = 0;
///     while receiver(n) {
///         n += 2;
///     }
/// });
///
/// assert_eq!(evens.trim(4).to_vec(), vec![0, 2, 4, 6]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

//! Jitter combinator - proportional randomization of numeric values.

use rand::{Rng, RngCore};

use crate::seq::magnitude::Magnitude;
use crate::seq::trait_def::Seq;

/// Re-scales each value `v` to `v + factor * v * r`, with `r` drawn
/// uniformly from `[-1, 1)` per value.
///
/// Created by [`SeqExt::jitter`](crate::seq::ext::SeqExt::jitter) and
/// [`SeqExt::jitter_with`](crate::seq::ext::SeqExt::jitter_with).
///
/// Every traversal draws from its own clone of the random source, so a
/// seeded source replays the same jitter on each traversal. A factor of
/// zero passes values through untouched and never consults the source.
#[derive(Debug, Clone)]
pub struct Jitter<S, R> {
    pub(crate) inner: S,
    pub(crate) factor: f64,
    pub(crate) rng: R,
}

impl<S, R> Seq for Jitter<S, R>
where
    S: Seq,
    S::Item: Magnitude,
    R: RngCore + Clone,
{
    type Item = S::Item;

    fn produce<F>(&self, mut receiver: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        if self.factor == 0.0 {
            self.inner.produce(receiver);
            return;
        }
        let mut rng = self.rng.clone();
        self.inner.produce(|v| {
            let r: f64 = rng.random_range(-1.0..1.0);
            receiver(apply_jitter(v, self.factor, r))
        })
    }
}

/// `v + factor * v * r`, computed in `f64` and converted back.
pub(crate) fn apply_jitter<T: Magnitude>(v: T, factor: f64, r: f64) -> T {
    if factor == 0.0 {
        return v;
    }
    let base = v.to_f64();
    T::from_f64(base + factor * base * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_apply_jitter_bounds() {
        assert_eq!(apply_jitter(100.0, 0.1, -1.0), 90.0);
        assert_eq!(apply_jitter(100.0, 0.1, 0.0), 100.0);
        assert!(apply_jitter(100.0, 0.1, 0.999) < 110.0);
    }

    #[test]
    fn test_apply_jitter_zero_factor_is_identity() {
        assert_eq!(apply_jitter(f64::MAX, 0.0, 0.5), f64::MAX);
        assert_eq!(apply_jitter(7u8, 0.0, -1.0), 7);
    }

    #[test]
    fn test_apply_jitter_on_durations() {
        let d = Duration::from_millis(200);
        assert_eq!(apply_jitter(d, 0.5, -1.0), Duration::from_millis(100));
        assert_eq!(apply_jitter(d, 0.5, 0.5), Duration::from_millis(250));
    }
}

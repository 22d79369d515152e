//! Numeric domains for growth and jitter.
//!
//! [`exponential`](crate::seq::sources::exponential) and
//! [`jitter`](crate::seq::ext::SeqExt::jitter) scale values by a floating
//! point factor. `Magnitude` is the bridge: a value converts to `f64`, is
//! scaled, and converts back. Conversions back into integer domains
//! saturate (and map `NaN` to zero), so scaling never wraps around.

use std::time::Duration;

/// An ordered value that can be scaled through `f64`.
///
/// Implemented for every primitive integer, `f32`, `f64` and
/// [`Duration`] (measured in nanoseconds, so millisecond-scale growth is
/// exact).
pub trait Magnitude: Copy + PartialOrd {
    /// Convert to `f64`.
    fn to_f64(self) -> f64;

    /// Convert back from `f64`, saturating at the bounds of the domain.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_magnitude_for_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_magnitude_for_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Magnitude for Duration {
    fn to_f64(self) -> f64 {
        self.as_nanos() as f64
    }

    fn from_f64(value: f64) -> Self {
        // `as u64` saturates; negative and NaN land on zero.
        Duration::from_nanos(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion_saturates() {
        assert_eq!(u8::from_f64(300.0), u8::MAX);
        assert_eq!(u8::from_f64(-4.0), 0);
        assert_eq!(i32::from_f64(f64::NAN), 0);
        assert_eq!(i64::from_f64(12.9), 12);
    }

    #[test]
    fn test_duration_roundtrip_is_exact_for_millis() {
        let d = Duration::from_millis(16);
        assert_eq!(Duration::from_f64(d.to_f64() * 2.0), Duration::from_millis(32));
    }

    #[test]
    fn test_negative_duration_is_zero() {
        assert_eq!(Duration::from_f64(-1.0), Duration::ZERO);
    }
}

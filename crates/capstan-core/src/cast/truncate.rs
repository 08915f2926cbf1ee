// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::AsPrimitive;

/// A trait for floating-point types that can be cast to an integer type
/// with truncation toward zero (no references).
///
/// The cast follows Rust's native `as` semantics: the fractional part is
/// discarded regardless of sign, values beyond the target range saturate to
/// the target's `MIN`/`MAX`, and NaN becomes zero.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::cast::truncate::CastTruncVal;
/// let a: i32 = 3.9f32.cast_trunc_val();
/// assert_eq!(a, 3); // Truncation discards the fraction
/// let b: i32 = (-3.9f32).cast_trunc_val();
/// assert_eq!(b, -3); // Toward zero, not toward negative infinity
/// let c: i32 = f32::NAN.cast_trunc_val();
/// assert_eq!(c, 0); // NaN maps to zero
/// let d: i32 = 1.0e12f64.cast_trunc_val();
/// assert_eq!(d, i32::MAX); // Out-of-range values saturate
/// ```
pub trait CastTruncVal<T>: Sized {
    /// Casts to `T`, truncating toward zero.
    fn cast_trunc_val(self) -> T;
}

macro_rules! cast_trunc_impl_val {
    ($src:ty => $dst:ty) => {
        impl CastTruncVal<$dst> for $src {
            #[inline(always)]
            fn cast_trunc_val(self) -> $dst {
                self as $dst
            }
        }
    };
}

cast_trunc_impl_val!(f32 => i32);
cast_trunc_impl_val!(f64 => i32);
cast_trunc_impl_val!(f64 => i64);

/// Casts `value` to `Dst`, truncating toward zero.
///
/// Generic entry point over [`num_traits::AsPrimitive`] for code that is
/// generic over the source or destination type. The semantics are exactly
/// those of the `as` operator, and therefore of [`CastTruncVal`].
///
/// # Examples
///
/// ```rust
/// # use capstan_core::cast::truncate::cast_trunc;
/// let n: i64 = cast_trunc(-7.5f64);
/// assert_eq!(n, -7);
/// ```
#[inline(always)]
pub fn cast_trunc<Src, Dst>(value: Src) -> Dst
where
    Src: AsPrimitive<Dst>,
    Dst: Copy + 'static,
{
    value.as_()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_toward_zero() {
        let positive: i32 = 3.9f32.cast_trunc_val();
        let negative: i32 = (-3.9f32).cast_trunc_val();
        assert_eq!(positive, 3);
        assert_eq!(negative, -3);
    }

    #[test]
    fn test_exact_integers_pass_through() {
        let a: i32 = 1024.0f32.cast_trunc_val();
        let b: i32 = (-1024.0f64).cast_trunc_val();
        let c: i64 = 4_294_967_296.0f64.cast_trunc_val();
        assert_eq!(a, 1024);
        assert_eq!(b, -1024);
        assert_eq!(c, 1 << 32);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let high: i32 = f32::INFINITY.cast_trunc_val();
        let low: i32 = f32::NEG_INFINITY.cast_trunc_val();
        assert_eq!(high, i32::MAX);
        assert_eq!(low, i32::MIN);

        // 2^31 as f32 is exactly representable and one past i32::MAX.
        let just_over: i32 = 2_147_483_648.0f32.cast_trunc_val();
        assert_eq!(just_over, i32::MAX);
        // -2^31 is representable and in range.
        let at_min: i32 = (-2_147_483_648.0f32).cast_trunc_val();
        assert_eq!(at_min, i32::MIN);
    }

    #[test]
    fn test_nan_is_zero() {
        let from_f32: i32 = f32::NAN.cast_trunc_val();
        let from_f64: i64 = f64::NAN.cast_trunc_val();
        assert_eq!(from_f32, 0);
        assert_eq!(from_f64, 0);
    }

    #[test]
    fn test_generic_matches_trait() {
        let via_fn: i32 = cast_trunc(123.75f64);
        let via_trait: i32 = 123.75f64.cast_trunc_val();
        assert_eq!(via_fn, via_trait);
    }
}

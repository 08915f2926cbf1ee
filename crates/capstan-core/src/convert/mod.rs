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

//! # Engine Conversion Surface
//!
//! The concrete, engine-facing call surface: truncating float-to-integer
//! casts and truncating `i32` division/remainder under the fail-fast
//! policy. Function names match the C helpers binding layers traditionally
//! import for these operations, so ported call sites read unchanged.
//!
//! ## Policy
//!
//! Division and remainder use Rust's native `/` and `%`, which panic
//! deterministically on a zero divisor and on `i32::MIN / -1` in every
//! build profile. That is the closest memory-safe analogue of the hardware
//! fault the C originals inherit. Callers that need a recoverable outcome
//! bound [`CheckedDivVal`](crate::num::ops::checked_division::CheckedDivVal)
//! instead; callers that need the raw two's-complement quotient bound
//! [`WrappingDivVal`](crate::num::ops::wrapping_division::WrappingDivVal).
//!
//! Casts use the native `as` operator: truncation toward zero, saturation
//! at the target bounds, NaN to zero.
//!
//! Every function here is pure, stateless, and reentrant.

use crate::cast::truncate::CastTruncVal;

/// Returns `f` cast to `i32`, truncating toward zero.
///
/// Out-of-range values saturate to `i32::MIN`/`i32::MAX`; NaN becomes `0`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::convert::int32_for_float;
/// assert_eq!(int32_for_float(3.9), 3);
/// assert_eq!(int32_for_float(-3.9), -3);
/// ```
#[inline(always)]
pub fn int32_for_float(f: f32) -> i32 {
    f.cast_trunc_val()
}

/// Returns `d` cast to `i32`, truncating toward zero.
///
/// Out-of-range values saturate to `i32::MIN`/`i32::MAX`; NaN becomes `0`.
#[inline(always)]
pub fn int32_for_double(d: f64) -> i32 {
    d.cast_trunc_val()
}

/// Returns `d` cast to `i64`, truncating toward zero.
///
/// Out-of-range values saturate to `i64::MIN`/`i64::MAX`; NaN becomes `0`.
#[inline(always)]
pub fn int64_for_double(d: f64) -> i64 {
    d.cast_trunc_val()
}

/// Returns `n / d`, truncated toward zero.
///
/// # Panics
///
/// Panics if `d` is zero, or if `n` is `i32::MIN` and `d` is `-1` (the
/// quotient `2^31` does not fit an `i32`).
///
/// # Examples
///
/// ```rust
/// # use capstan_core::convert::int32_divide;
/// assert_eq!(int32_divide(7, 2), 3);
/// assert_eq!(int32_divide(-7, 2), -3);
/// ```
#[inline(always)]
pub fn int32_divide(n: i32, d: i32) -> i32 {
    n / d
}

/// Returns `n % d`, with the sign of the dividend.
///
/// Paired with [`int32_divide`] so that
/// `int32_divide(n, d) * d + int32_remainder(n, d) == n` for every input
/// pair where both are defined.
///
/// # Panics
///
/// Panics if `d` is zero, or if `n` is `i32::MIN` and `d` is `-1` (the
/// remainder is computed through the same overflowing divide).
///
/// # Examples
///
/// ```rust
/// # use capstan_core::convert::int32_remainder;
/// assert_eq!(int32_remainder(7, 2), 1);
/// assert_eq!(int32_remainder(-7, 2), -1);
/// ```
#[inline(always)]
pub fn int32_remainder(n: i32, d: i32) -> i32 {
    n % d
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_cast_truncates() {
        assert_eq!(int32_for_float(3.9), 3);
        assert_eq!(int32_for_float(-3.9), -3);
        assert_eq!(int32_for_float(0.0), 0);
        assert_eq!(int32_for_float(-0.0), 0);
        assert_eq!(int32_for_double(3.9), 3);
        assert_eq!(int32_for_double(-3.9), -3);
        assert_eq!(int64_for_double(1.0e15), 1_000_000_000_000_000);
    }

    #[test]
    fn test_cast_edge_values() {
        assert_eq!(int32_for_float(f32::NAN), 0);
        assert_eq!(int32_for_float(f32::INFINITY), i32::MAX);
        assert_eq!(int32_for_float(f32::NEG_INFINITY), i32::MIN);
        assert_eq!(int32_for_double(1.0e100), i32::MAX);
        assert_eq!(int32_for_double(-1.0e100), i32::MIN);
        assert_eq!(int64_for_double(f64::NAN), 0);
        assert_eq!(int64_for_double(1.0e100), i64::MAX);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(int32_divide(7, 2), 3);
        assert_eq!(int32_divide(-7, 2), -3);
        assert_eq!(int32_divide(7, -2), -3);
        assert_eq!(int32_divide(-7, -2), 3);
    }

    #[test]
    fn test_remainder_follows_dividend_sign() {
        assert_eq!(int32_remainder(7, 2), 1);
        assert_eq!(int32_remainder(-7, 2), -1);
        assert_eq!(int32_remainder(7, -2), 1);
        assert_eq!(int32_remainder(-7, -2), -1);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn test_divide_by_zero_panics() {
        int32_divide(7, 0);
    }

    #[test]
    #[should_panic(expected = "remainder with a divisor of zero")]
    fn test_remainder_by_zero_panics() {
        int32_remainder(7, 0);
    }

    #[test]
    #[should_panic]
    fn test_divide_min_by_minus_one_panics() {
        int32_divide(i32::MIN, -1);
    }

    #[test]
    #[should_panic]
    fn test_remainder_min_by_minus_one_panics() {
        int32_remainder(i32::MIN, -1);
    }

    #[test]
    fn test_euclidean_identity_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let n: i32 = rng.gen();
            let d: i32 = rng.gen();
            if d == 0 || (n == i32::MIN && d == -1) {
                continue;
            }
            let q = int32_divide(n, d);
            let r = int32_remainder(n, d);
            assert_eq!(q * d + r, n, "identity failed for n={n}, d={d}");
            assert!(r == 0 || (r < 0) == (n < 0), "sign failed for n={n}, d={d}");
            assert!(r.unsigned_abs() < d.unsigned_abs());
        }
    }

    #[test]
    fn test_cast_matches_truncation_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let f: f32 = rng.gen_range(-1.0e6..1.0e6);
            let expected = f64::from(f).trunc();
            assert_eq!(i64::from(int32_for_float(f)), expected as i64);
            assert!(f64::from(int32_for_float(f)).abs() <= f64::from(f).abs());
        }
    }
}

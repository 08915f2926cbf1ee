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

use num_traits::Float;

/// Sign extraction for floating-point values (by value, no references).
///
/// Returns `+1` for strictly positive values, `-1` for strictly negative
/// values, and `0` otherwise. "Otherwise" covers both signed zeros *and*
/// NaN: the result is the chained comparison `x > 0 ? 1 : x < 0 ? -1 : 0`,
/// which engine code uses, not IEEE `signum` (where `signum(-0.0) == -1.0`
/// and `signum(NaN)` is NaN).
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::sign::SignVal;
/// assert_eq!(2.5f32.sign_val(), 1.0);
/// assert_eq!((-0.75f64).sign_val(), -1.0);
/// assert_eq!((-0.0f32).sign_val(), 0.0); // Not -1 as with signum
/// assert_eq!(f64::NAN.sign_val(), 0.0); // Not NaN as with signum
/// ```
pub trait SignVal: Sized {
    /// Returns `+1`, `-1`, or `0` according to the sign of `self`.
    fn sign_val(self) -> Self;
}

impl<T: Float> SignVal for T {
    #[inline(always)]
    fn sign_val(self) -> Self {
        if self > T::zero() {
            T::one()
        } else if self < T::zero() {
            -T::one()
        } else {
            T::zero()
        }
    }
}

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

use core::ops::{Div, Rem};

/// A trait for signed integers that support wrapping truncating division by
/// value (no references).
///
/// This is the hardware-faithful policy: `MIN / -1` wraps to `MIN`, the
/// two's-complement result a divide instruction produces when the quotient
/// does not fit. A zero divisor still panics, because the hardware has no
/// result to reproduce there.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::wrapping_division::WrappingDivVal;
/// assert_eq!(7i32.wrapping_div_val(2), 3);
/// assert_eq!((-7i32).wrapping_div_val(2), -3); // Truncates toward zero
/// assert_eq!(i32::MIN.wrapping_div_val(-1), i32::MIN); // Wraps
/// ```
pub trait WrappingDivVal: Sized + Div<Self, Output = Self> {
    /// Performs wrapping truncating division by value.
    ///
    /// # Panics
    ///
    /// Panics if `v` is zero.
    fn wrapping_div_val(self, v: Self) -> Self;
}

/// A trait for signed integers that support wrapping truncating remainder
/// by value (no references).
///
/// `MIN % -1` wraps to `0`, paired with [`WrappingDivVal`] so that
/// `n == q * d + r` holds in wrapping arithmetic even through the overflow.
/// A zero divisor panics.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::wrapping_division::WrappingRemVal;
/// assert_eq!(7i32.wrapping_rem_val(2), 1);
/// assert_eq!((-7i32).wrapping_rem_val(2), -1); // Sign of the dividend
/// assert_eq!(i32::MIN.wrapping_rem_val(-1), 0); // Wraps
/// ```
pub trait WrappingRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs wrapping truncating remainder by value.
    ///
    /// # Panics
    ///
    /// Panics if `v` is zero.
    fn wrapping_rem_val(self, v: Self) -> Self;
}

macro_rules! wrapping_division_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

wrapping_division_impl_val!(WrappingDivVal, wrapping_div_val, i8, wrapping_div);
wrapping_division_impl_val!(WrappingDivVal, wrapping_div_val, i16, wrapping_div);
wrapping_division_impl_val!(WrappingDivVal, wrapping_div_val, i32, wrapping_div);
wrapping_division_impl_val!(WrappingDivVal, wrapping_div_val, i64, wrapping_div);
wrapping_division_impl_val!(WrappingDivVal, wrapping_div_val, isize, wrapping_div);
wrapping_division_impl_val!(WrappingDivVal, wrapping_div_val, i128, wrapping_div);

wrapping_division_impl_val!(WrappingRemVal, wrapping_rem_val, i8, wrapping_rem);
wrapping_division_impl_val!(WrappingRemVal, wrapping_rem_val, i16, wrapping_rem);
wrapping_division_impl_val!(WrappingRemVal, wrapping_rem_val, i32, wrapping_rem);
wrapping_division_impl_val!(WrappingRemVal, wrapping_rem_val, i64, wrapping_rem);
wrapping_division_impl_val!(WrappingRemVal, wrapping_rem_val, isize, wrapping_rem);
wrapping_division_impl_val!(WrappingRemVal, wrapping_rem_val, i128, wrapping_rem);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_div_val<T: WrappingDivVal>(a: T, b: T) -> T {
        a.wrapping_div_val(b)
    }
    fn wrapping_rem_val<T: WrappingRemVal>(a: T, b: T) -> T {
        a.wrapping_rem_val(b)
    }

    #[test]
    fn test_wrapping_div_val() {
        assert_eq!(wrapping_div_val(7i32, 2i32), 3);
        assert_eq!(wrapping_div_val(-7i32, 2i32), -3);
        assert_eq!(wrapping_div_val(i32::MIN, -1i32), i32::MIN);
        assert_eq!(wrapping_div_val(i8::MIN, -1i8), i8::MIN);
    }

    #[test]
    fn test_wrapping_rem_val() {
        assert_eq!(wrapping_rem_val(7i32, 2i32), 1);
        assert_eq!(wrapping_rem_val(-7i32, 2i32), -1);
        assert_eq!(wrapping_rem_val(i32::MIN, -1i32), 0);
        assert_eq!(wrapping_rem_val(i64::MIN, -1i64), 0);
    }

    #[test]
    #[should_panic]
    fn test_wrapping_div_val_zero_divisor_panics() {
        wrapping_div_val(1i32, 0i32);
    }

    #[test]
    #[should_panic]
    fn test_wrapping_rem_val_zero_divisor_panics() {
        wrapping_rem_val(1i32, 0i32);
    }
}

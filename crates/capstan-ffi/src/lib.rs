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

//! # Capstan FFI
//!
//! **C-Compatible Bindings for the Capstan Numeric Primitives.**
//!
//! This crate exposes the engine conversion surface of `capstan-core` over
//! a stable C ABI, so host languages that cannot express C cast and
//! division semantics natively can import them the same way they would
//! import an inlinable C helper header.
//!
//! ## Core Design Principles
//!
//! 1.  **Scalars Only**: Every export takes and returns plain numeric
//!     values. There are no handles, no allocation, and therefore no
//!     lifecycle to manage.
//! 2.  **Fail-Fast Safety**: The division exports keep the fail-fast trap
//!     policy of the core crate. A zero divisor or `INT32_MIN / -1` aborts
//!     the process at the boundary instead of unwinding into the host or
//!     returning a silently wrong value.

use capstan_core::convert;

/// Returns `f` cast to `int32_t`, truncating toward zero.
///
/// Out-of-range values saturate to `INT32_MIN`/`INT32_MAX`; NaN becomes 0.
#[no_mangle]
pub extern "C" fn capstan_int32_for_float(f: f32) -> i32 {
    convert::int32_for_float(f)
}

/// Returns `d` cast to `int32_t`, truncating toward zero.
///
/// Out-of-range values saturate to `INT32_MIN`/`INT32_MAX`; NaN becomes 0.
#[no_mangle]
pub extern "C" fn capstan_int32_for_double(d: f64) -> i32 {
    convert::int32_for_double(d)
}

/// Returns `d` cast to `int64_t`, truncating toward zero.
///
/// Out-of-range values saturate to `INT64_MIN`/`INT64_MAX`; NaN becomes 0.
#[no_mangle]
pub extern "C" fn capstan_int64_for_double(d: f64) -> i64 {
    convert::int64_for_double(d)
}

/// Returns `n / d`, truncated toward zero.
///
/// Aborts the process if `d` is zero or if `n` is `INT32_MIN` and `d` is
/// `-1`.
#[no_mangle]
pub extern "C" fn capstan_int32_divide(n: i32, d: i32) -> i32 {
    convert::int32_divide(n, d)
}

/// Returns `n % d`, with the sign of the dividend.
///
/// Aborts the process if `d` is zero or if `n` is `INT32_MIN` and `d` is
/// `-1`.
#[no_mangle]
pub extern "C" fn capstan_int32_remainder(n: i32, d: i32) -> i32 {
    convert::int32_remainder(n, d)
}

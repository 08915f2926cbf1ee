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

//! # Capstan Core
//!
//! Engine-compatible numeric primitives: truncating float-to-integer casts,
//! truncating integer division and remainder under explicit overflow
//! policies, float sign extraction, chained-comparison clamping, and the
//! comparison epsilons engine code expects. Binding layers use these
//! primitives to reproduce, bit for bit, the arithmetic a C/C++ engine
//! performs, instead of scattering raw `as` casts and `/` operators through
//! call sites.
//!
//! ## Modules
//!
//! - `cast`: By-value truncating float-to-integer cast traits
//!   (`CastTruncVal`) for the `f32 -> i32`, `f64 -> i32`, and `f64 -> i64`
//!   conversions, plus a generic `cast_trunc` entry point.
//! - `convert`: The concrete engine-facing call surface
//!   (`int32_for_float`, `int32_divide`, `int32_remainder`, and friends)
//!   with the fail-fast division policy.
//! - `num`: Integer division/remainder traits with checked (`Option<T>`)
//!   and wrapping (two's-complement) semantics, float sign and clamp
//!   helpers, and engine comparison epsilons.
//!
//! ## Purpose
//!
//! Every operation here is a pure, stateless, reentrant function of its
//! arguments. The value of the crate is not the arithmetic itself but the
//! pinned-down semantics: each edge case (zero divisors, `MIN / -1`,
//! out-of-range and NaN casts) is either documented to panic or documented
//! to produce a specific value, so callers never inherit an accidental
//! policy from whichever operator happened to be nearest.
//!
//! Refer to each module for detailed APIs and examples.

pub mod cast;
pub mod convert;
pub mod num;

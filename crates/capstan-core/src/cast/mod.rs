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

//! # Truncating Casts
//!
//! Float-to-integer conversion with truncation toward zero, exposed as
//! by-value traits so generic code can name the conversion it relies on
//! instead of reaching for a bare `as` expression.
//!
//! ## Submodules
//!
//! - `truncate`: The `CastTruncVal<T>` trait with implementations for the
//!   `f32 -> i32`, `f64 -> i32`, and `f64 -> i64` conversions, and the
//!   generic `cast_trunc` free function.
//!
//! ## Motivation
//!
//! Engine-parity code must perform float-to-integer casts with one agreed
//! semantic everywhere. Rust's `as` already truncates toward zero and fully
//! defines the cases C leaves undefined (out-of-range values saturate, NaN
//! becomes zero), which is also what the AArch64 `fcvtzs` instruction
//! produces. Routing casts through this module keeps that choice visible
//! and greppable.

pub mod truncate;

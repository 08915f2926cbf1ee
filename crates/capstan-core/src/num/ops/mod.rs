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

//! # Numeric Operations Traits
//!
//! By-value operation traits for engine-parity arithmetic. Each submodule
//! pins one semantic policy so generic code can state, in its bounds,
//! exactly how edge cases are handled.
//!
//! ## Submodules
//!
//! - `checked_division`: `CheckedDivVal` / `CheckedRemVal` returning
//!   `Option<T>` (`None` on a zero divisor or `MIN / -1` overflow).
//! - `wrapping_division`: `WrappingDivVal` / `WrappingRemVal` reproducing
//!   the two's-complement hardware result on `MIN / -1`.
//! - `clamp`: `ClampedVal`, chained-comparison clamping with no range
//!   validation.
//! - `sign`: `SignVal`, float sign extraction mapping zeros and NaN to
//!   zero.
//!
//! ## Motivation
//!
//! Truncating division is the one primitive operation where Rust, C, and
//! the underlying hardware can all disagree once inputs leave the happy
//! path. Naming each policy as a trait keeps the disagreement out of
//! generic code: a bound of `CheckedDivVal` cannot silently become a
//! process abort, and a bound of `WrappingDivVal` cannot silently lose the
//! hardware result.
//!
//! Refer to each submodule for examples and trait lists.

pub mod checked_division;
pub mod clamp;
pub mod sign;
pub mod wrapping_division;

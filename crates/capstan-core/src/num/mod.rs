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

//! # Numeric Foundations
//!
//! Integer division/remainder traits under explicit edge-case policies,
//! float sign and clamp helpers, and the comparison epsilons engine code
//! relies on.
//!
//! ## Submodules
//!
//! - `constants`: Engine comparison epsilons (`CMP_EPSILON`,
//!   `UNIT_EPSILON`) in `f64` and `f32` widths.
//! - `ops`: By-value operation traits: checked and wrapping truncating
//!   division/remainder, chained-comparison clamping, and float sign.
//!
//! ## Motivation
//!
//! Signed truncating division has two fault conditions (a zero divisor and
//! the `MIN / -1` overflow), and which outcome is correct depends on the
//! caller: recover, reproduce the hardware result, or fail fast. These
//! modules name each policy so the choice is explicit at the call site
//! rather than inherited from the nearest operator.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod ops;

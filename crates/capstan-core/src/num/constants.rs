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

/// Tolerance for approximate equality of general values.
///
/// Matches the engine's internal comparison epsilon, which is not exported
/// by the engine itself; code reproducing engine comparisons must carry its
/// own copy.
pub const CMP_EPSILON: f64 = 0.00001;

/// Single-precision width of [`CMP_EPSILON`].
pub const CMP_EPSILON_F: f32 = CMP_EPSILON as f32;

/// Tolerance for checking whether a value is normalized (unit length).
///
/// Matches the engine's internal unit epsilon, which is likewise not
/// exported.
pub const UNIT_EPSILON: f64 = 0.001;

/// Single-precision width of [`UNIT_EPSILON`].
pub const UNIT_EPSILON_F: f32 = UNIT_EPSILON as f32;

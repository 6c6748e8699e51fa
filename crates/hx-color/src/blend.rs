//! Mixing, negatives, and gradients.
//!
//! All operations work on integer channels. Mixing averages with floor
//! division; gradients interpolate linearly and floor each intermediate
//! channel, so the first and last entries are always the exact endpoints.

use std::num::NonZeroU32;

use crate::color::{Color, MAX_INDEX, clamp_channel};

/// Steps used by the gradient command when the user gives none.
pub const DEFAULT_GRADIENT_STEPS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Largest accepted gradient step count. Adjacent entries stop changing well
/// before this (channels differ by at most 255).
pub const MAX_GRADIENT_STEPS: NonZeroU32 = NonZeroU32::new(1024).unwrap();

/// Average two colors channel by channel, rounding down.
#[must_use]
pub const fn mix(a: Color, b: Color) -> Color {
    Color::rgb(
        floor_average(a.r, b.r),
        floor_average(a.g, b.g),
        floor_average(a.b, b.b),
    )
}

/// The negative of a decimal index: `0xFFFFFF - index`.
///
/// Equivalent to inverting every channel (`255 - c`). Indices above the
/// maximum are clamped first.
#[must_use]
pub const fn negative(index: u32) -> Color {
    let index = if index > MAX_INDEX { MAX_INDEX } else { index };
    Color::from_index(MAX_INDEX - index)
}

/// Linear gradient from `from` to `to` with `steps` intervals.
///
/// Returns `steps + 1` colors. Entry `i` has each channel at
/// `floor(a + (b - a) * i / steps)`.
#[must_use]
pub fn gradient(from: Color, to: Color, steps: NonZeroU32) -> Vec<Color> {
    let steps = steps.get();
    (0..=steps)
        .map(|i| {
            Color::rgb(
                lerp_channel(from.r, to.r, i, steps),
                lerp_channel(from.g, to.g, i, steps),
                lerp_channel(from.b, to.b, i, steps),
            )
        })
        .collect()
}

/// Floor of `(a + b) / 2` without widening.
#[inline]
const fn floor_average(a: u8, b: u8) -> u8 {
    a / 2 + b / 2 + (a & b & 1)
}

/// One interpolated channel. `div_euclid` floors for the positive divisor,
/// which also matches truncation here since the result is never negative.
#[inline]
fn lerp_channel(a: u8, b: u8, i: u32, steps: u32) -> u8 {
    let a = i64::from(a);
    let delta = (i64::from(b) - a) * i64::from(i);
    clamp_channel(a + delta.div_euclid(i64::from(steps)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

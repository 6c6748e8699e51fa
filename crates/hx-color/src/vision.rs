//! Color-blindness simulation via fixed 3×3 linear transforms.
//!
//! Each dichromacy is approximated by a matrix applied to the 8-bit RGB
//! triple. Results are truncated toward zero and clamped to `0..=255`.

use std::fmt;

use crate::color::Color;

/// Row-major 3×3 transform applied to `(r, g, b)`.
pub type Matrix3 = [[f64; 3]; 3];

const PROTANOPIA: Matrix3 = [
    [0.566_67, 0.433_33, 0.0],
    [0.558_33, 0.441_67, 0.0],
    [0.0, 0.241_67, 0.758_33],
];

const DEUTERANOPIA: Matrix3 = [
    [0.625, 0.375, 0.0],
    [0.70, 0.30, 0.0],
    [0.0, 0.30, 0.70],
];

const TRITANOPIA: Matrix3 = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433_33, 0.566_67],
    [0.0, 0.475, 0.525],
];

/// A simulated form of dichromatic vision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Missing L cones (red-blind).
    Protanopia,
    /// Missing M cones (green-blind).
    Deuteranopia,
    /// Missing S cones (blue-blind).
    Tritanopia,
}

impl Deficiency {
    /// Every deficiency, in display order.
    pub const ALL: [Self; 3] = [Self::Protanopia, Self::Deuteranopia, Self::Tritanopia];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
        }
    }

    /// The transform for this deficiency.
    #[must_use]
    pub const fn matrix(self) -> &'static Matrix3 {
        match self {
            Self::Protanopia => &PROTANOPIA,
            Self::Deuteranopia => &DEUTERANOPIA,
            Self::Tritanopia => &TRITANOPIA,
        }
    }

    /// How `color` appears under this deficiency.
    #[must_use]
    pub fn simulate(self, color: Color) -> Color {
        apply_matrix(color, self.matrix())
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply `m` to the channels of `color`.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn apply_matrix(color: Color, m: &Matrix3) -> Color {
    let (r, g, b) = (f64::from(color.r), f64::from(color.g), f64::from(color.b));
    let row = |i: usize| r * m[i][0] + g * m[i][1] + b * m[i][2];
    Color::rgb(truncate_channel(row(0)), truncate_channel(row(1)), truncate_channel(row(2)))
}

/// Simulate every deficiency, in display order.
#[must_use]
pub fn simulate_color_blindness(color: Color) -> [(Deficiency, Color); 3] {
    Deficiency::ALL.map(|d| (d, d.simulate(color)))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_channel(v: f64) -> u8 {
    v.trunc().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

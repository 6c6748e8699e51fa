// SPDX-License-Identifier: MIT
//
// Terminal color capability and the ANSI-256 fallback palette.
//
// Swatches are drawn with 24-bit TrueColor whenever the terminal advertises
// it through COLORTERM. Otherwise every color is downgraded to the nearest
// entry of the xterm 256-color palette so the swatch is still roughly right.

use std::fmt;

use hx_color::Color;

// ─── CellColor ───────────────────────────────────────────────────────────────

/// A color as the terminal will receive it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// 24-bit `TrueColor`.
    Rgb(u8, u8, u8),

    /// ANSI 256-color palette index.
    Ansi256(u8),

    /// Terminal default color.
    #[default]
    Default,
}

impl CellColor {
    /// Downgrade to the ANSI-256 palette.
    #[must_use]
    pub fn to_ansi256(self) -> Self {
        match self {
            Self::Rgb(r, g, b) => Self::Ansi256(nearest_ansi256(Color::rgb(r, g, b))),
            other => other,
        }
    }
}

impl From<Color> for CellColor {
    fn from(color: Color) -> Self {
        Self::Rgb(color.r, color.g, color.b)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Rgb(r, g, b) => write!(f, "Rgb({:?})", Color::rgb(r, g, b)),
            Self::Ansi256(idx) => write!(f, "Ansi256({idx})"),
            Self::Default => f.write_str("Default"),
        }
    }
}

// ─── ColorSupport ────────────────────────────────────────────────────────────

/// How many colors the terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSupport {
    /// 24-bit RGB escapes (`48;2;R;G;B`).
    #[default]
    TrueColor,

    /// 256-color palette escapes (`48;5;N`).
    Ansi256,
}

impl ColorSupport {
    /// Decide from a `COLORTERM` value (`truecolor` / `24bit` mean 24-bit).
    #[must_use]
    pub fn from_colorterm(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("truecolor" | "24bit") => Self::TrueColor,
            _ => Self::Ansi256,
        }
    }

    /// Map a color into something this terminal can show.
    #[must_use]
    pub fn resolve(self, color: Color) -> CellColor {
        match self {
            Self::TrueColor => CellColor::from(color),
            Self::Ansi256 => CellColor::from(color).to_ansi256(),
        }
    }
}

// ─── ANSI Palette ────────────────────────────────────────────────────────────
//
// The 256-color ANSI palette consists of:
// - Colors 0–15: standard and bright colors (terminal-defined, skipped here)
// - Colors 16–231: a 6×6×6 RGB color cube
// - Colors 232–255: a 24-step grayscale ramp

/// Convert an ANSI-256 cube or ramp index to RGB.
///
/// Indices below 16 are terminal-defined; they map to the cube's black.
#[must_use]
pub const fn ansi256_to_rgb(idx: u8) -> (u8, u8, u8) {
    match idx {
        0..=15 => (0, 0, 0),
        16..=231 => {
            let idx = idx - 16;
            (
                cube_level(idx / 36),
                cube_level((idx % 36) / 6),
                cube_level(idx % 6),
            )
        }
        232..=255 => {
            let v = 8 + 10 * (idx - 232);
            (v, v, v)
        }
    }
}

/// The cube uses: 0, 95, 135, 175, 215, 255.
const fn cube_level(i: u8) -> u8 {
    if i == 0 { 0 } else { 55 + 40 * i }
}

/// Nearest cube or grayscale entry by squared RGB distance.
#[must_use]
pub fn nearest_ansi256(color: Color) -> u8 {
    let mut best_idx: u8 = 16;
    let mut best_dist = u32::MAX;

    for idx in 16u8..=255 {
        let (r, g, b) = ansi256_to_rgb(idx);
        let dist = sq_diff(color.r, r) + sq_diff(color.g, g) + sq_diff(color.b, b);
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }

    best_idx
}

#[inline]
fn sq_diff(a: u8, b: u8) -> u32 {
    let d = u32::from(a.abs_diff(b));
    d * d
}

// ─── Tests ───────────────────────────────────────────────────────────────────

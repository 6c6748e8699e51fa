//! The 24-bit sRGB color value and its three canonical representations.
//!
//! A [`Color`] can be written as a 6-digit hex code (`"FF00AA"`), an RGB
//! triple, or a decimal index in `0..=16_777_215`. All three are exact views
//! of the same value:
//!
//! ```text
//! index = r * 65536 + g * 256 + b
//! hex   = format!("{r:02X}{g:02X}{b:02X}")
//! ```
//!
//! Hex input is strict: exactly six hex digits, no `#` prefix, either case.
//! Callers that accept a leading `#` from users strip it before parsing.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::ColorError;

/// The largest decimal index (`0xFFFFFF`).
pub const MAX_INDEX: u32 = 0xFF_FFFF;

/// Number of distinct colors in the 24-bit space.
pub const COLOR_COUNT: u32 = MAX_INDEX + 1;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A 24-bit sRGB color.
///
/// Serializes as `{"r": .., "g": .., "b": ..}`, which is the shape of the
/// `rgb` field in exported metadata.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black (`000000`).
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white (`FFFFFF`).
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integer channels, clamping each to `0..=255`.
    #[must_use]
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(
            clamp_channel(i64::from(r)),
            clamp_channel(i64::from(g)),
            clamp_channel(i64::from(b)),
        )
    }

    /// Create a color from its decimal index.
    ///
    /// Indices above [`MAX_INDEX`] clamp to white.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        let index = if index > MAX_INDEX { MAX_INDEX } else { index };
        let [_, r, g, b] = index.to_be_bytes();
        Self { r, g, b }
    }

    /// Parse a strict 6-digit hex code (no `#`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless `s` is exactly six hex
    /// digits.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        let (r, g, b) = hex_to_rgb(s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// The decimal index of this color.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }

    /// The 8-bit channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The channels normalized to `0.0..=1.0`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// 6-digit uppercase hex, no prefix.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// The next color in index order, saturating at white.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index().saturating_add(1))
    }

    /// The previous color in index order, saturating at black.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{self}")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl From<u32> for Color {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.index()
    }
}

// ---------------------------------------------------------------------------
// Free-standing conversions
// ---------------------------------------------------------------------------

/// True iff `s` is exactly six hex digits (case-insensitive).
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Split a 6-digit hex code into its channels.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is not exactly six hex
/// digits.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }
    let bytes = hex.as_bytes();
    match (
        parse_hex_byte(&bytes[0..2]),
        parse_hex_byte(&bytes[2..4]),
        parse_hex_byte(&bytes[4..6]),
    ) {
        (Some(r), Some(g), Some(b)) => Ok((r, g, b)),
        _ => Err(ColorError::InvalidFormat(hex.to_string())),
    }
}

/// Join channels into 6-digit uppercase hex, clamping each to `0..=255`.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Color::from_channels(r, g, b).to_hex()
}

/// Render a decimal index as 6-digit hex (indices above the maximum clamp).
#[must_use]
pub fn index_to_hex(index: u32) -> String {
    Color::from_index(index).to_hex()
}

/// Parse a 6-digit hex code into its decimal index.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for malformed input.
pub fn hex_to_index(hex: &str) -> Result<u32, ColorError> {
    Color::hex(hex).map(Color::index)
}

/// Parse user input as a decimal index.
///
/// Only non-empty runs of ASCII digits are accepted. Values past
/// [`MAX_INDEX`] (including ones too large for `u64`) clamp to the maximum.
///
/// # Errors
///
/// Returns [`ColorError::InvalidNumber`] for empty or non-digit input.
pub fn parse_index(s: &str) -> Result<u32, ColorError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorError::InvalidNumber(s.to_string()));
    }
    let value = s.parse::<u64>().unwrap_or(u64::MAX);
    Ok(u32::try_from(value).map_or(MAX_INDEX, |v| v.min(MAX_INDEX)))
}

/// Draw a color uniformly from the whole 24-bit space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_index(rng.random_range(0..=MAX_INDEX))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Clamp a wide integer into a channel value.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn clamp_channel(v: i64) -> u8 {
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // -- Hex parsing --------------------------------------------------------

    #[test]
    fn valid_hex_accepts_both_cases() {
        assert!(is_valid_hex("FF00AA"));
        assert!(is_valid_hex("ff00aa"));
        assert!(is_valid_hex("c0FfEe"));
    }

    #[test]
    fn valid_hex_rejects_wrong_shapes() {
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("FFF"));
        assert!(!is_valid_hex("#FF00AA"));
        assert!(!is_valid_hex("FF00AA0"));
        assert!(!is_valid_hex("GG0000"));
        assert!(!is_valid_hex(" FF00A"));
        assert!(!is_valid_hex("ÿÿÿ"));
    }

    #[test]
    fn hex_to_rgb_splits_channels() {
        assert_eq!(hex_to_rgb("FF00AA").unwrap(), (255, 0, 170));
        assert_eq!(hex_to_rgb("0a0b0c").unwrap(), (10, 11, 12));
    }

    #[test]
    fn hex_to_rgb_reports_invalid_format() {
        let err = hex_to_rgb("12345").unwrap_err();
        assert_eq!(err, ColorError::InvalidFormat("12345".to_string()));
    }

    #[test]
    fn rgb_to_hex_is_uppercase_and_padded() {
        assert_eq!(rgb_to_hex(255, 0, 170), "FF00AA");
        assert_eq!(rgb_to_hex(1, 2, 3), "010203");
    }

    #[test]
    fn rgb_to_hex_clamps_out_of_range() {
        assert_eq!(rgb_to_hex(-20, 300, 128), "00FF80");
    }

    #[test]
    fn hex_roundtrip_normalizes_case() {
        for hex in ["000000", "FFFFFF", "7F007F", "C86432", "00FF01"] {
            let (r, g, b) = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(i32::from(r), i32::from(g), i32::from(b)), hex);
        }
        let (r, g, b) = hex_to_rgb("abcdef").unwrap();
        assert_eq!(rgb_to_hex(i32::from(r), i32::from(g), i32::from(b)), "ABCDEF");
    }

    // -- Decimal index ------------------------------------------------------

    #[test]
    fn index_matches_channel_formula() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.index(), 0x12 * 65536 + 0x34 * 256 + 0x56);
    }

    #[test]
    fn index_roundtrip_samples() {
        for n in [0, 1, 255, 256, 65_535, 65_536, 8_388_608, 16_711_681, MAX_INDEX] {
            assert_eq!(hex_to_index(&index_to_hex(n)).unwrap(), n);
        }
    }

    #[test]
    fn index_roundtrip_stride() {
        let mut n = 0;
        while n <= MAX_INDEX {
            assert_eq!(Color::from_index(n).index(), n);
            n += 4099;
        }
    }

    #[test]
    fn from_index_clamps_above_max() {
        assert_eq!(Color::from_index(MAX_INDEX + 10), Color::WHITE);
        assert_eq!(index_to_hex(u32::MAX), "FFFFFF");
    }

    #[test]
    fn next_and_previous_saturate() {
        assert_eq!(Color::WHITE.next(), Color::WHITE);
        assert_eq!(Color::BLACK.previous(), Color::BLACK);
        assert_eq!(Color::hex("FF0000").unwrap().next().to_hex(), "FF0001");
        assert_eq!(Color::hex("010000").unwrap().previous().to_hex(), "00FFFF");
    }

    #[test]
    fn parse_index_accepts_digits() {
        assert_eq!(parse_index("0").unwrap(), 0);
        assert_eq!(parse_index("16711681").unwrap(), 16_711_681);
        assert_eq!(parse_index("007").unwrap(), 7);
    }

    #[test]
    fn parse_index_clamps_large_values() {
        assert_eq!(parse_index("16777216").unwrap(), MAX_INDEX);
        assert_eq!(parse_index("99999999999999999999999999").unwrap(), MAX_INDEX);
    }

    #[test]
    fn parse_index_rejects_non_digits() {
        for input in ["", "-1", "1.5", "abc", "+3", " 12"] {
            assert_eq!(
                parse_index(input),
                Err(ColorError::InvalidNumber(input.to_string())),
                "input {input:?}"
            );
        }
    }

    // -- Formatting ---------------------------------------------------------

    #[test]
    fn display_and_debug() {
        let c = Color::rgb(0x7F, 0x00, 0x7F);
        assert_eq!(c.to_string(), "7F007F");
        assert_eq!(format!("{c:?}"), "#7F007F");
    }

    #[test]
    fn from_str_parses() {
        let c: Color = "00ff80".parse().unwrap();
        assert_eq!(c, Color::rgb(0, 255, 128));
        assert!("nope".parse::<Color>().is_err());
    }

    // -- Random -------------------------------------------------------------

    #[test]
    fn random_color_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
        }
    }
}

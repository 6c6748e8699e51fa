//! Relative luminance and contrast against white.
//!
//! Uses the sRGB linearization published with WCAG 2.0 (threshold `0.03928`)
//! and BT.709 channel weights. Contrast is always measured against pure
//! white, whose luminance is 1.0, so the ratio lands in `[1.0, 21.0]`.

// Evaluated term by term so rounded values match the reference formula.
#![allow(clippy::suboptimal_flops)]

use crate::color::Color;

/// Luminance of pure white.
const WHITE_LUMINANCE: f64 = 1.0;

/// Flare term added to both sides of the WCAG ratio.
const FLARE: f64 = 0.05;

/// Remove the sRGB gamma curve from one normalized channel.
#[inline]
#[must_use]
pub fn linearize(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0.0, 1.0]`.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrast ratio of a color with the given luminance against white.
///
/// Returns `(1.0 + 0.05) / (luminance + 0.05)`; never below 1.0 for
/// luminance in `[0.0, 1.0]`.
#[must_use]
pub fn contrast_vs_white(luminance: f64) -> f64 {
    (WHITE_LUMINANCE + FLARE) / (luminance + FLARE)
}

/// Round to a fixed number of decimal places for display and export.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_primaries_match_weights() {
        let red = relative_luminance(Color::rgb(255, 0, 0));
        let green = relative_luminance(Color::rgb(0, 255, 0));
        let blue = relative_luminance(Color::rgb(0, 0, 255));
        assert!(approx_eq(red, 0.2126, 1e-9), "Red luminance: {red}");
        assert!(approx_eq(green, 0.7152, 1e-9), "Green luminance: {green}");
        assert!(approx_eq(blue, 0.0722, 1e-9), "Blue luminance: {blue}");
    }

    #[test]
    fn luminance_mid_gray() {
        // 0x80 linearizes to ~0.2159.
        let lum = relative_luminance(Color::rgb(128, 128, 128));
        assert!(approx_eq(lum, 0.215_861, 1e-5), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn linearize_uses_linear_segment_below_threshold() {
        let c = 10.0 / 255.0;
        assert!(approx_eq(linearize(c), c / 12.92, 1e-15));
    }

    // ── Contrast vs white ───────────────────────────────────────────

    #[test]
    fn contrast_white_is_one() {
        let ratio = contrast_vs_white(relative_luminance(Color::WHITE));
        assert!(approx_eq(ratio, 1.0, 1e-9), "White contrast: {ratio}");
        assert!((contrast_vs_white(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn contrast_black_is_twenty_one() {
        let ratio = contrast_vs_white(relative_luminance(Color::BLACK));
        assert!(approx_eq(ratio, 21.0, 1e-9), "Black contrast: {ratio}");
    }

    #[test]
    fn contrast_never_below_one() {
        for idx in (0..=crate::MAX_INDEX).step_by(99_991) {
            let ratio = contrast_vs_white(relative_luminance(Color::from_index(idx)));
            assert!(ratio >= 1.0 - 1e-12, "Contrast < 1 for {idx}: {ratio}");
        }
    }

    // ── Rounding ────────────────────────────────────────────────────

    #[test]
    fn round_to_places() {
        assert!(approx_eq(round_to(5.252_525, 2), 5.25, 1e-12));
        assert!(approx_eq(round_to(0.123_456_789, 6), 0.123_457, 1e-12));
        assert!(approx_eq(round_to(21.0, 2), 21.0, 1e-12));
    }
}

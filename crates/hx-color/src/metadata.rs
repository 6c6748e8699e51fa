//! Derived, read-only facts about a single color.
//!
//! [`ColorMetadata`] is computed on demand and never cached. It serializes
//! to the record written by exports:
//!
//! ```json
//! {
//!     "hex": "#FF0000",
//!     "rgb": { "r": 255, "g": 0, "b": 0 },
//!     "luminance": 0.2126,
//!     "contrast_vs_white": "4.00 : 1",
//!     "decimal_index": 16711680,
//!     "name": "red"
//! }
//! ```

use serde::{Serialize, Serializer};

use crate::color::Color;
use crate::contrast::{contrast_vs_white, relative_luminance, round_to};
use crate::names::color_name_or_unknown;

/// Decimal places kept for luminance.
pub const LUMINANCE_PLACES: i32 = 6;

/// Decimal places kept for the contrast ratio.
pub const CONTRAST_PLACES: i32 = 2;

/// Hex, channels, luminance, contrast, index, and name of a color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMetadata {
    /// `#`-prefixed 6-digit uppercase hex.
    pub hex: String,
    pub rgb: Color,
    /// Relative luminance, rounded to 6 places.
    pub luminance: f64,
    /// Contrast against white, rounded to 2 places.
    #[serde(serialize_with = "ratio_label")]
    pub contrast_vs_white: f64,
    pub decimal_index: u32,
    /// CSS keyword, or `"Unknown"`.
    pub name: String,
}

impl ColorMetadata {
    /// Compute the metadata of `color`.
    #[must_use]
    pub fn of(color: Color) -> Self {
        let luminance = relative_luminance(color);
        Self {
            hex: format!("#{color}"),
            rgb: color,
            luminance: round_to(luminance, LUMINANCE_PLACES),
            contrast_vs_white: round_to(contrast_vs_white(luminance), CONTRAST_PLACES),
            decimal_index: color.index(),
            name: color_name_or_unknown(color).to_string(),
        }
    }
}

impl From<Color> for ColorMetadata {
    fn from(color: Color) -> Self {
        Self::of(color)
    }
}

/// Format a contrast ratio the way it is read aloud: `"4.00 : 1"`.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2} : 1")
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn ratio_label<S: Serializer>(ratio: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_ratio(*ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn metadata_of_red() {
        let meta = ColorMetadata::of(Color::rgb(255, 0, 0));
        assert_eq!(meta.hex, "#FF0000");
        assert_eq!(meta.decimal_index, 16_711_680);
        assert_eq!(meta.name, "red");
        assert!((meta.luminance - 0.2126).abs() < 1e-9);
        assert!((meta.contrast_vs_white - 4.0).abs() < 1e-9);
    }

    #[test]
    fn metadata_serializes_to_export_shape() {
        let value = serde_json::to_value(ColorMetadata::of(Color::BLACK)).unwrap();
        assert_eq!(
            value,
            json!({
                "hex": "#000000",
                "rgb": { "r": 0, "g": 0, "b": 0 },
                "luminance": 0.0,
                "contrast_vs_white": "21.00 : 1",
                "decimal_index": 0,
                "name": "black",
            })
        );
    }

    #[test]
    fn unnamed_colors_report_unknown() {
        let meta = ColorMetadata::of(Color::rgb(0x7F, 0x00, 0x7F));
        assert_eq!(meta.name, "Unknown");
        assert_eq!(meta.decimal_index, 0x7F007F);
    }

    #[test]
    fn luminance_is_rounded_to_six_places() {
        let meta = ColorMetadata::of(Color::rgb(128, 128, 128));
        assert!((meta.luminance - 0.215_861).abs() < 1e-12, "{}", meta.luminance);
    }

    #[test]
    fn ratio_formatting() {
        assert_eq!(format_ratio(1.0), "1.00 : 1");
        assert_eq!(format_ratio(5.25), "5.25 : 1");
    }
}

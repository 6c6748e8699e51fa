//! # hx-color — color math for hexplorer
//!
//! Pure functions over the 24-bit sRGB space. Nothing here does I/O or holds
//! state; the session layer calls in with validated colors and formats the
//! results.
//!
//! ```text
//! "FF0000" ──hex_to_rgb──▶ (255, 0, 0) ──index──▶ 16711680
//!     │
//!     ├── contrast.rs:  relative luminance, contrast vs white
//!     ├── blend.rs:     mix, negative, gradient
//!     ├── harmony.rs:   complementary / analogous / triadic / tetradic
//!     ├── vision.rs:    protanopia / deuteranopia / tritanopia
//!     ├── names.rs:     CSS keyword lookup
//!     └── metadata.rs:  the exported per-color record
//! ```
//!
//! The only fallible operations are the parsers, which return
//! [`ColorError`].

pub mod blend;
pub mod color;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod metadata;
pub mod names;
pub mod vision;

pub use blend::{gradient, mix, negative};
pub use color::{
    COLOR_COUNT, Color, MAX_INDEX, hex_to_index, hex_to_rgb, index_to_hex, is_valid_hex,
    parse_index, random_color, rgb_to_hex,
};
pub use contrast::{contrast_vs_white, relative_luminance};
pub use error::ColorError;
pub use harmony::{HarmonyRole, HarmonyScheme, harmony_scheme, random_scheme};
pub use metadata::ColorMetadata;
pub use names::color_name;
pub use vision::{Deficiency, simulate_color_blindness};

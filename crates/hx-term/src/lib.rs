// SPDX-License-Identifier: MIT
//
// hx-term — terminal swatch rendering for hexplorer.
//
// The only place escape codes are produced. Callers pass a color and a label;
// the painter decides between 24-bit TrueColor and the ANSI-256 fallback
// based on what the terminal advertises.
//
// Like the rest of the workspace this avoids TUI frameworks: output is plain
// line-oriented text with a handful of SGR sequences.

pub mod ansi;
pub mod painter;
pub mod palette;

pub use ansi::Sgr;
pub use painter::Painter;
pub use palette::{CellColor, ColorSupport};

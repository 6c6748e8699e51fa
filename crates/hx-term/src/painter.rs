// SPDX-License-Identifier: MIT
//
// Painter — line-oriented output with color swatches.
//
// The session layer hands the painter plain data (a color and a label) and
// never touches escape codes. A swatch is a fixed-width block of background-
// colored cells followed by its label:
//
//                   ████████ #7F007F
//   └─ 18 spaces ─┘ └ 8 ───┘
//
// Every write goes straight to the wrapped writer; callers flush before
// blocking on input.

use std::fmt;
use std::io::{self, Write};

use hx_color::Color;

use crate::ansi::Sgr;
use crate::palette::{CellColor, ColorSupport};

/// Left indent before each swatch.
pub const SWATCH_INDENT: usize = 18;

/// Width of a swatch in cells.
pub const SWATCH_WIDTH: usize = 8;

const ERROR_COLOR: Color = Color::rgb(255, 85, 85);

/// Writes text and color swatches to a terminal.
pub struct Painter<W: Write> {
    out: W,
    support: ColorSupport,
}

impl<W: Write> Painter<W> {
    /// Wrap `out`, drawing swatches with the given color support.
    pub const fn new(out: W, support: ColorSupport) -> Self {
        Self { out, support }
    }

    /// Draw one swatch of `color` followed by `label`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn swatch(&mut self, color: Color, label: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{:indent$}{}{:width$}{} {label}",
            "",
            Sgr::Bg(self.support.resolve(color)),
            "",
            Sgr::Reset,
            indent = SWATCH_INDENT,
            width = SWATCH_WIDTH,
        )
    }

    /// Draw a swatch labelled with the color's `#HEX`.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn hex_swatch(&mut self, color: Color) -> io::Result<()> {
        self.swatch(color, &format!("#{color}"))
    }

    /// Write one line of plain text.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn line(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")
    }

    /// Write text without a trailing newline (for prompts).
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write an empty line.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn blank(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    /// Write a bold heading line.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}{text}{}", Sgr::Bold, Sgr::Reset)
    }

    /// Write an error line in the error color.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}error: {text}{}",
            Sgr::Fg(self.support.resolve(ERROR_COLOR)),
            Sgr::Fg(CellColor::Default),
        )
    }

    /// Flush the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates flush failures from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Borrow the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the painter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn painter(support: ColorSupport) -> Painter<Vec<u8>> {
        Painter::new(Vec::new(), support)
    }

    fn output(p: Painter<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn truecolor_swatch_layout() {
        let mut p = painter(ColorSupport::TrueColor);
        p.hex_swatch(Color::rgb(0x7F, 0x00, 0x7F)).unwrap();
        let expected = format!(
            "{}\x1b[48;2;127;0;127m{}\x1b[0m #7F007F\n",
            " ".repeat(SWATCH_INDENT),
            " ".repeat(SWATCH_WIDTH)
        );
        assert_eq!(output(p), expected);
    }

    #[test]
    fn ansi256_swatch_uses_palette_index() {
        let mut p = painter(ColorSupport::Ansi256);
        p.swatch(Color::rgb(255, 0, 0), "red").unwrap();
        let out = output(p);
        assert!(out.contains("\x1b[48;5;196m"), "{out:?}");
        assert!(out.ends_with(" red\n"));
    }

    #[test]
    fn line_and_blank() {
        let mut p = painter(ColorSupport::TrueColor);
        p.line(format_args!("Index: {}", 42)).unwrap();
        p.blank().unwrap();
        assert_eq!(output(p), "Index: 42\n\n");
    }

    #[test]
    fn heading_is_bold() {
        let mut p = painter(ColorSupport::TrueColor);
        p.heading("Schemes").unwrap();
        assert_eq!(output(p), "\x1b[1mSchemes\x1b[0m\n");
    }

    #[test]
    fn error_is_colored_and_reset() {
        let mut p = painter(ColorSupport::TrueColor);
        p.error("bad hex").unwrap();
        assert_eq!(output(p), "\x1b[38;2;255;85;85merror: bad hex\x1b[39m\n");
    }

    #[test]
    fn text_has_no_newline() {
        let mut p = painter(ColorSupport::TrueColor);
        p.text("> ").unwrap();
        assert_eq!(output(p), "> ");
    }
}

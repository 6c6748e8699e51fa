// SPDX-License-Identifier: MIT
//
// SGR escape sequences as values.
//
// A swatch needs four sequences: reset, bold, and a foreground or background
// color. Each is an `Sgr` value whose `Display` impl is the exact byte
// encoding, so callers splice them into ordinary `write!` calls:
//
//   write!(out, "{}{:8}{}", Sgr::Bg(color), "", Sgr::Reset)
//
// Color layers pick the shortest encoding for the cell color:
//
//   Default     → 39 / 49
//   Ansi256(n)  → 38;5;n / 48;5;n
//   Rgb(r,g,b)  → 38;2;r;g;b / 48;2;r;g;b

use std::fmt;

use crate::palette::CellColor;

/// One Select Graphic Rendition command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    /// `0`: back to terminal defaults.
    Reset,
    /// `1`
    Bold,
    /// Text color.
    Fg(CellColor),
    /// Cell background.
    Bg(CellColor),
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, default, color) = match *self {
            Self::Reset => return f.write_str("\x1b[0m"),
            Self::Bold => return f.write_str("\x1b[1m"),
            Self::Fg(color) => (38, 39, color),
            Self::Bg(color) => (48, 49, color),
        };
        match color {
            CellColor::Default => write!(f, "\x1b[{default}m"),
            CellColor::Ansi256(idx) => write!(f, "\x1b[{base};5;{idx}m"),
            CellColor::Rgb(r, g, b) => write!(f, "\x1b[{base};2;{r};{g};{b}m"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attributes() {
        assert_eq!(Sgr::Reset.to_string(), "\x1b[0m");
        assert_eq!(Sgr::Bold.to_string(), "\x1b[1m");
    }

    #[test]
    fn foreground_encodings() {
        assert_eq!(Sgr::Fg(CellColor::Default).to_string(), "\x1b[39m");
        assert_eq!(Sgr::Fg(CellColor::Ansi256(196)).to_string(), "\x1b[38;5;196m");
        assert_eq!(
            Sgr::Fg(CellColor::Rgb(255, 128, 0)).to_string(),
            "\x1b[38;2;255;128;0m"
        );
    }

    #[test]
    fn background_encodings() {
        assert_eq!(Sgr::Bg(CellColor::Default).to_string(), "\x1b[49m");
        assert_eq!(Sgr::Bg(CellColor::Ansi256(21)).to_string(), "\x1b[48;5;21m");
        assert_eq!(
            Sgr::Bg(CellColor::Rgb(127, 0, 127)).to_string(),
            "\x1b[48;2;127;0;127m"
        );
    }

    #[test]
    fn splices_into_write() {
        let mut out = String::new();
        std::fmt::Write::write_fmt(
            &mut out,
            format_args!("{}{:3}{}", Sgr::Bg(CellColor::Ansi256(9)), "", Sgr::Reset),
        )
        .unwrap();
        assert_eq!(out, "\x1b[48;5;9m   \x1b[0m");
    }
}

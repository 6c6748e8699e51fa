// SPDX-License-Identifier: MIT
//
// Command-line flags and the configuration resolved from them.
//
// Resolution happens once at startup. Everything the process reads from its
// environment is captured into `Environment` first, so resolution itself is
// a pure function that tests can drive directly.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hx_term::ColorSupport;

/// Shared-storage export folder used inside Termux.
pub const TERMUX_EXPORT_DIR: &str = "/storage/emulated/0/hexplorer.json";

/// Explore the 24-bit color space by HEX code and decimal index.
#[derive(Parser, Debug)]
#[command(name = "hexplorer", version, about, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Directory JSON exports are written to
    #[arg(long, value_name = "DIR", env = "HEXPLORER_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Swatch color mode
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Append COLORTERM/TERM exports to ~/.bashrc (off by default; applies to
    /// new shells, not this run)
    #[arg(long)]
    pub patch_profile: bool,
}

/// How swatches are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Detect from `COLORTERM`.
    #[default]
    Auto,
    /// 24-bit escapes.
    Truecolor,
    /// Nearest ANSI-256 palette entry.
    Ansi256,
}

impl ColorMode {
    /// Pick the color support, consulting `COLORTERM` only in `Auto`.
    #[must_use]
    pub fn resolve(self, colorterm: Option<&str>) -> ColorSupport {
        match self {
            Self::Auto => ColorSupport::from_colorterm(colorterm),
            Self::Truecolor => ColorSupport::TrueColor,
            Self::Ansi256 => ColorSupport::Ansi256,
        }
    }
}

// ─── Environment ─────────────────────────────────────────────────────────────

/// The parts of the process environment configuration depends on.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// `$PREFIX`, set by Termux.
    pub prefix: Option<String>,
    pub colorterm: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
}

impl Environment {
    /// Read the current process environment.
    pub fn capture() -> Self {
        Self {
            prefix: std::env::var("PREFIX").ok(),
            colorterm: std::env::var("COLORTERM").ok(),
            data_dir: dirs::data_dir(),
            home_dir: dirs::home_dir(),
        }
    }

    /// Whether we are running inside Termux.
    #[must_use]
    pub fn is_termux(&self) -> bool {
        self.prefix.as_deref().is_some_and(|p| p.contains("com.termux"))
    }

    /// Where exports go when no directory is given.
    #[must_use]
    pub fn default_export_dir(&self) -> PathBuf {
        if self.is_termux() {
            return PathBuf::from(TERMUX_EXPORT_DIR);
        }
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hexplorer")
    }

    /// `~/.bashrc`, if a home directory is known.
    #[must_use]
    pub fn bashrc(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(".bashrc"))
    }
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub export_dir: PathBuf,
    pub color: ColorSupport,
    pub patch_profile: bool,
}

impl Config {
    /// Combine parsed flags with the captured environment.
    #[must_use]
    pub fn resolve(args: &Args, env: &Environment) -> Self {
        Self {
            export_dir: args
                .export_dir
                .clone()
                .unwrap_or_else(|| env.default_export_dir()),
            color: args.color.resolve(env.colorterm.as_deref()),
            patch_profile: args.patch_profile,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
